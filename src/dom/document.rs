//! SSML Document parsing
//!
//! Parsing runs in three stages:
//! 1. Root validation: the input must be one `<speak>...</speak>` element
//! 2. Recursive descent: every slice is either one element or a text leaf
//! 3. Content splitting: mixed content is cut into direct-child slices
//!
//! A level only brackets its own direct children. Deeper nesting is split
//! again when each child slice is parsed, so no tag stack is kept.

use super::node::{Element, Node};
use crate::core::attributes::parse_attributes;
use crate::core::entities::unescape;
use crate::core::tokenizer::{self, classify_tag, fragments, FragmentKind, TagKind};
use crate::error::ParseError;
use log::{debug, trace};

/// Required name of the top-level element
pub const ROOT_TAG: &str = "speak";

/// Parse an SSML document into its `<speak>` element
///
/// Leading and trailing whitespace of the document is ignored; whitespace
/// inside text is kept verbatim. Fails on the first violation found, outer
/// checks before inner ones and siblings left to right.
pub fn parse(document: &str) -> Result<Node, ParseError> {
    let result = validate_root(document.trim()).and_then(parse_node);
    if let Err(err) = &result {
        debug!("SSML rejected ({}): {}", err.kind().as_str(), err);
    }
    result
}

/// Check the document is a single `<speak>` element and return its span
///
/// The root runs from the first opening tag to the LAST closing tag, so
/// anything after the final closing tag is not looked at.
fn validate_root(document: &str) -> Result<&str, ParseError> {
    if !document.starts_with('<') || !document.ends_with('>') {
        return Err(ParseError::MalformedDocument(
            "must start with < and end with >",
        ));
    }

    let open = tokenizer::find_open_tag(document, 0)
        .ok_or(ParseError::MalformedDocument("no valid tags found"))?;
    let close = tokenizer::rfind_close_tag(document, open.span.1)
        .ok_or(ParseError::MalformedDocument("no valid tags found"))?;

    if open.name != ROOT_TAG {
        return Err(ParseError::InvalidRoot(open.name.to_string()));
    }
    if close.name != open.name {
        return Err(ParseError::MismatchedTag(format!(
            "<{}> closed by </{}>",
            open.name, close.name
        )));
    }

    trace!("root <{}> spans {}..{}", open.name, open.span.0, close.span.1);
    Ok(&document[open.span.0..close.span.1])
}

/// Parse a slice holding one element or plain text
fn parse_node(slice: &str) -> Result<Node, ParseError> {
    let Some(found) =
        tokenizer::match_element(slice).or_else(|| tokenizer::match_self_closing(slice))
    else {
        return Ok(Node::Text(unescape(slice).into_owned()));
    };
    trace!("<{}> with {} bytes of content", found.name, found.content.len());

    let attributes = parse_attributes(found.attrs)?;

    let children = if found.content.is_empty() {
        Vec::new()
    } else if !found.content.contains(['<', '>']) {
        vec![Node::Text(unescape(found.content).into_owned())]
    } else {
        split_content(found.content)?
            .into_iter()
            .map(|child| match child {
                Child::Text(raw) => Ok(Node::Text(unescape(raw).into_owned())),
                Child::Markup(raw) => parse_node(raw),
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(Node::Element(Element::new(found.name, attributes, children)))
}

/// Byte range of one direct child inside mixed content
struct Piece {
    start: usize,
    end: usize,
    text: bool,
}

/// One direct child slice, already known to be text or markup
#[derive(Debug, PartialEq, Eq)]
enum Child<'a> {
    Text(&'a str),
    Markup(&'a str),
}

/// Split mixed content into direct-child slices
///
/// One cursor holds the name of the open child. While it is set every
/// fragment belongs to that child, until a closing tag of the same name.
/// Consecutive text is merged into one slice. Text slices are never
/// re-matched as markup, even when a bogus bracket run looks tag-like inside.
fn split_content(content: &str) -> Result<Vec<Child<'_>>, ParseError> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut open: Option<&str> = None;

    for fragment in fragments(content) {
        let (start, end) = fragment.span;

        if let Some(name) = open {
            if let Some(last) = pieces.last_mut() {
                last.end = end;
            }
            if fragment.kind == FragmentKind::Tag
                && classify_tag(fragment.raw) == TagKind::Closing(name)
            {
                open = None;
            }
            continue;
        }

        let tag = match fragment.kind {
            FragmentKind::Tag => classify_tag(fragment.raw),
            FragmentKind::Text => TagKind::Other,
        };
        match tag {
            TagKind::Closing(name) => {
                return Err(ParseError::MismatchedTag(format!("unexpected </{name}>")));
            }
            TagKind::SelfClosing(_) => pieces.push(Piece { start, end, text: false }),
            TagKind::Opening(name) => {
                open = Some(name);
                pieces.push(Piece { start, end, text: false });
            }
            // unrecognized brackets read as text
            TagKind::Other => match pieces.last_mut() {
                Some(last) if last.text => last.end = end,
                _ => pieces.push(Piece { start, end, text: true }),
            },
        }
    }

    if let Some(name) = open {
        return Err(ParseError::MismatchedTag(format!("<{name}> is never closed")));
    }

    trace!("split {} bytes into {} children", content.len(), pieces.len());
    Ok(pieces
        .iter()
        .map(|p| {
            let raw = &content[p.start..p.end];
            if p.text {
                Child::Text(raw)
            } else {
                Child::Markup(raw)
            }
        })
        .collect())
}
