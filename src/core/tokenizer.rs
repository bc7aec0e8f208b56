//! SSML Tokenizer - tag recognition over raw markup
//!
//! Recognizes the three tag shapes SSML uses:
//! - Opening tags: `<name attrs>`
//! - Closing tags: `</name>`
//! - Self-closing tags: `<name attrs/>`
//!
//! and splits mixed content into a flat sequence of tag and text fragments.
//! Whitespace is allowed after `<`, around `/` and before `>`.

use super::scanner::Scanner;
use memchr::memmem;

/// An opening tag `<name attrs>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    /// Raw text between the name and `>`
    pub attrs: &'a str,
    /// Raw span in input (start, end)
    pub span: (usize, usize),
}

/// A closing tag `</name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTag<'a> {
    pub name: &'a str,
    pub span: (usize, usize),
}

/// A whole element located inside a slice of markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMatch<'a> {
    pub name: &'a str,
    pub attrs: &'a str,
    /// Everything between `>` and the matching `</name>`; empty when self-closing
    pub content: &'a str,
}

/// Parse an opening tag starting exactly at `start`
///
/// The tag ends at the first `>` after the name, so a self-closing tag
/// also parses here with a trailing `/` in `attrs`.
pub fn open_tag_at(input: &str, start: usize) -> Option<OpenTag<'_>> {
    let mut scanner = Scanner::at(input, start);
    if !scanner.eat(b'<') {
        return None;
    }
    scanner.skip_whitespace();
    let name = scanner.read_name()?;
    let attrs_start = scanner.position();
    let end = scanner.find_tag_end()?;

    Some(OpenTag {
        name,
        attrs: scanner.slice(attrs_start, end),
        span: (start, end + 1),
    })
}

/// Parse a closing tag starting exactly at `start`
pub fn close_tag_at(input: &str, start: usize) -> Option<CloseTag<'_>> {
    let mut scanner = Scanner::at(input, start);
    if !scanner.eat(b'<') {
        return None;
    }
    scanner.skip_whitespace();
    if !scanner.eat(b'/') {
        return None;
    }
    scanner.skip_whitespace();
    let name = scanner.read_name()?;
    scanner.skip_whitespace();
    if !scanner.eat(b'>') {
        return None;
    }

    Some(CloseTag {
        name,
        span: (start, scanner.position()),
    })
}

/// Find the first opening tag at or after `from`
pub fn find_open_tag(input: &str, from: usize) -> Option<OpenTag<'_>> {
    let mut scanner = Scanner::at(input, from);
    loop {
        let lt = scanner.find_tag_start()?;
        if let Some(tag) = open_tag_at(input, lt) {
            return Some(tag);
        }
        scanner.set_position(lt + 1);
    }
}

/// Find the last closing tag that starts at or after `from`
pub fn rfind_close_tag(input: &str, from: usize) -> Option<CloseTag<'_>> {
    let scanner = Scanner::at(input, from);
    let mut end = input.len();
    loop {
        let lt = scanner.rfind_tag_start(end)?;
        if let Some(tag) = close_tag_at(input, lt) {
            return Some(tag);
        }
        end = lt;
    }
}

/// Find the first `</name>` at or after `from`
fn find_close_tag_named<'a>(input: &'a str, from: usize, name: &str) -> Option<CloseTag<'a>> {
    let mut scanner = Scanner::at(input, from);
    loop {
        let lt = scanner.find_tag_start()?;
        match close_tag_at(input, lt) {
            Some(tag) if tag.name == name => return Some(tag),
            _ => scanner.set_position(lt + 1),
        }
    }
}

/// Locate `<name attrs>content</name>` in `input`
///
/// Takes the first opening tag that has a closing tag of the same name after
/// it, and pairs it with the nearest such closing tag.
pub fn match_element(input: &str) -> Option<ElementMatch<'_>> {
    let mut from = 0;
    loop {
        let open = find_open_tag(input, from)?;
        if let Some(close) = find_close_tag_named(input, open.span.1, open.name) {
            return Some(ElementMatch {
                name: open.name,
                attrs: open.attrs,
                content: &input[open.span.1..close.span.0],
            });
        }
        from = open.span.0 + 1;
    }
}

/// Locate `<name attrs/>` in `input`
///
/// The attribute text runs up to the last `/>` in the input.
pub fn match_self_closing(input: &str) -> Option<ElementMatch<'_>> {
    let mut scanner = Scanner::new(input);
    loop {
        let lt = scanner.find_tag_start()?;
        scanner.set_position(lt + 1);
        scanner.skip_whitespace();
        let Some(name) = scanner.read_name() else {
            continue;
        };

        let attrs_start = scanner.position();
        let slash = attrs_start + memmem::rfind(&input.as_bytes()[attrs_start..], b"/>")?;
        return Some(ElementMatch {
            name,
            attrs: &input[attrs_start..slash],
            content: "",
        });
    }
}

/// Shape of a tag fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind<'a> {
    Opening(&'a str),
    Closing(&'a str),
    SelfClosing(&'a str),
    /// Bracketed but not a recognizable tag, e.g. `< >` or `<!-- -->`
    Other,
}

/// Classify a `<...>` fragment
pub fn classify_tag(raw: &str) -> TagKind<'_> {
    if let Some(close) = close_tag_at(raw, 0) {
        if close.span.1 == raw.len() {
            return TagKind::Closing(close.name);
        }
    }
    match open_tag_at(raw, 0) {
        Some(open) if raw.ends_with("/>") => TagKind::SelfClosing(open.name),
        Some(open) => TagKind::Opening(open.name),
        None => TagKind::Other,
    }
}

/// Type of content fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A bracketed run `<...>` with at least one character inside
    Tag,
    /// Text between tags
    Text,
}

/// A piece of mixed content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub kind: FragmentKind,
    pub raw: &'a str,
    /// Raw span in input (start, end)
    pub span: (usize, usize),
}

/// Split mixed content into non-empty tag and text fragments, in order
pub fn fragments(input: &str) -> Fragments<'_> {
    Fragments { input, pos: 0 }
}

/// Iterator returned by [`fragments`]
pub struct Fragments<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let (kind, end) = match next_tag_span(self.input, start) {
            Some((lt, gt_end)) if lt == start => (FragmentKind::Tag, gt_end),
            Some((lt, _)) => (FragmentKind::Text, lt),
            None => (FragmentKind::Text, self.input.len()),
        };
        self.pos = end;

        Some(Fragment {
            kind,
            raw: &self.input[start..end],
            span: (start, end),
        })
    }
}

/// Find the next `<` ... `>` run with a non-empty inside
fn next_tag_span(input: &str, from: usize) -> Option<(usize, usize)> {
    let mut scanner = Scanner::at(input, from);
    loop {
        let lt = scanner.find_tag_start()?;
        scanner.set_position(lt + 1);
        // "<>" is not a tag
        if matches!(scanner.peek(), Some(b'>') | None) {
            continue;
        }
        let gt = scanner.find_tag_end()?;
        return Some((lt, gt + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<'a>(input: &'a str) -> Vec<(FragmentKind, &'a str)> {
        fragments(input).map(|f| (f.kind, f.raw)).collect()
    }

    #[test]
    fn test_open_tag() {
        let tag = open_tag_at("< prosody rate=\"slow\">x", 0).unwrap();
        assert_eq!(tag.name, "prosody");
        assert_eq!(tag.attrs, " rate=\"slow\"");
        assert_eq!(tag.span, (0, 22));
    }

    #[test]
    fn test_open_tag_rejects_closing() {
        assert_eq!(open_tag_at("</speak>", 0), None);
        assert_eq!(open_tag_at("< >", 0), None);
        assert_eq!(open_tag_at("<speak", 0), None);
    }

    #[test]
    fn test_close_tag() {
        let tag = close_tag_at("x</ speak >", 1).unwrap();
        assert_eq!(tag.name, "speak");
        assert_eq!(tag.span, (1, 11));
        assert_eq!(close_tag_at("</speak x>", 0), None);
        assert_eq!(close_tag_at("<speak>", 0), None);
    }

    #[test]
    fn test_rfind_close_tag_takes_last() {
        let input = "<speak>a</speak>b</foo>";
        let tag = rfind_close_tag(input, 7).unwrap();
        assert_eq!(tag.name, "foo");
        assert_eq!(rfind_close_tag("<speak>abc", 7), None);
    }

    #[test]
    fn test_match_element_pairs_nearest_close() {
        let m = match_element("<s>x<em>y</em>z</s>").unwrap();
        assert_eq!(m.name, "s");
        assert_eq!(m.content, "x<em>y</em>z");
    }

    #[test]
    fn test_match_element_requires_whole_name() {
        assert_eq!(match_element("<speak>x</spea>"), None);
    }

    #[test]
    fn test_match_element_skips_unclosed_opener() {
        let m = match_element("<a><b>x</b>").unwrap();
        assert_eq!(m.name, "b");
        assert_eq!(m.content, "x");
    }

    #[test]
    fn test_match_self_closing() {
        let m = match_self_closing("<break time='1s'/>").unwrap();
        assert_eq!(m.name, "break");
        assert_eq!(m.attrs, " time='1s'");
        assert_eq!(m.content, "");
        assert_eq!(match_self_closing("<break>"), None);
        assert_eq!(match_self_closing("plain text"), None);
    }

    #[test]
    fn test_classify_tag() {
        assert_eq!(classify_tag("<s>"), TagKind::Opening("s"));
        assert_eq!(classify_tag("<s a='1'>"), TagKind::Opening("s"));
        assert_eq!(classify_tag("</s>"), TagKind::Closing("s"));
        assert_eq!(classify_tag("< / s >"), TagKind::Closing("s"));
        assert_eq!(classify_tag("<break/>"), TagKind::SelfClosing("break"));
        assert_eq!(classify_tag("<break time='1s' />"), TagKind::SelfClosing("break"));
        assert_eq!(classify_tag("<!-- x -->"), TagKind::Other);
        assert_eq!(classify_tag("< >"), TagKind::Other);
    }

    #[test]
    fn test_fragments() {
        assert_eq!(
            kinds("a<break/>b<s>c</s>"),
            vec![
                (FragmentKind::Text, "a"),
                (FragmentKind::Tag, "<break/>"),
                (FragmentKind::Text, "b"),
                (FragmentKind::Tag, "<s>"),
                (FragmentKind::Text, "c"),
                (FragmentKind::Tag, "</s>"),
            ]
        );
    }

    #[test]
    fn test_fragments_skip_empty_brackets() {
        assert_eq!(kinds("a <> b"), vec![(FragmentKind::Text, "a <> b")]);
        assert_eq!(kinds("1 < 2"), vec![(FragmentKind::Text, "1 < 2")]);
        assert_eq!(kinds("2 > 1"), vec![(FragmentKind::Text, "2 > 1")]);
    }

    #[test]
    fn test_fragments_adjacent_tags() {
        assert_eq!(
            kinds("<a><b/></a>"),
            vec![
                (FragmentKind::Tag, "<a>"),
                (FragmentKind::Tag, "<b/>"),
                (FragmentKind::Tag, "</a>"),
            ]
        );
        assert_eq!(fragments("").count(), 0);
    }
}
