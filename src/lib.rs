//! RustySSML - SSML parsing without an XML library
//!
//! Parses the subset of SSML (Speech Synthesis Markup Language) used in
//! synthesis requests into a small owned tree, and flattens trees back to
//! plain text.
//!
//! Layers:
//! - core: scanner, tokenizer, entity decoding, attributes
//! - dom: tree types, document parser, text extraction
//! - strategy: parallel batch parsing (Rayon)
//! - term + NIFs: Elixir bindings (`RustySSML.Native`)

use rustler::{Binary, Env, NifResult, Term};

pub mod core;
pub mod dom;
pub mod error;
pub mod strategy;
mod term;

pub use crate::core::attributes::Attribute;
pub use crate::core::entities::unescape;
pub use crate::dom::{flatten, parse, Element, Node};
pub use crate::error::{ErrorKind, ParseError};

/// Parse a document and flatten it to its text content
pub fn parse_to_text(document: &str) -> Result<String, ParseError> {
    parse(document).map(|node| flatten(&node))
}

/// Borrow raw input bytes as a document
///
/// Invalid UTF-8 is reported as a malformed document.
pub fn decode_input(input: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(input)
        .map_err(|_| ParseError::MalformedDocument("input is not valid UTF-8"))
}

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// NIFs
// ============================================================================

/// Parse SSML into `{:ok, tree}` or `{:error, {kind, message}}`
#[rustler::nif(name = "parse")]
fn nif_parse<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    let result = decode_input(input.as_slice()).and_then(parse);
    Ok(term::parse_result_to_term(env, &result))
}

/// Parse SSML and return `{:ok, text}` with all tags stripped
#[rustler::nif(name = "to_text")]
fn nif_to_text<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    let result = decode_input(input.as_slice()).and_then(parse_to_text);
    Ok(term::text_result_to_term(env, &result))
}

/// Parse many documents in parallel, one result tuple per input
#[rustler::nif(name = "parse_many", schedule = "DirtyCpu")]
fn nif_parse_many<'a>(env: Env<'a>, inputs: Vec<Binary<'a>>) -> NifResult<Term<'a>> {
    let inputs: Vec<&[u8]> = inputs.iter().map(|input| input.as_slice()).collect();
    let results = strategy::parse_parallel(&inputs);
    Ok(term::results_to_term(env, &results, term::parse_result_to_term))
}

/// Parse and flatten many documents in parallel
#[rustler::nif(name = "to_text_many", schedule = "DirtyCpu")]
fn nif_to_text_many<'a>(env: Env<'a>, inputs: Vec<Binary<'a>>) -> NifResult<Term<'a>> {
    let inputs: Vec<&[u8]> = inputs.iter().map(|input| input.as_slice()).collect();
    let results = strategy::parse_to_text_parallel(&inputs);
    Ok(term::results_to_term(env, &results, term::text_result_to_term))
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.RustySSML.Native");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_to_text() {
        assert_eq!(
            parse_to_text("<speak>Hello <emphasis>world</emphasis>!</speak>"),
            Ok("Hello world!".to_string())
        );
        assert_eq!(
            parse_to_text("<voice>x</voice>").map_err(|e| e.kind()),
            Err(ErrorKind::InvalidRoot)
        );
    }

    #[test]
    fn test_decode_input() {
        assert_eq!(decode_input(b"<speak>x</speak>"), Ok("<speak>x</speak>"));
        assert_eq!(
            decode_input(&[b'<', 0xff, b'>']).map_err(|e| e.kind()),
            Err(ErrorKind::MalformedDocument)
        );
    }

    #[test]
    fn test_public_reexports() {
        let node = parse("<speak><break time='2s'/>ok</speak>").unwrap();
        let speak: &Element = node.as_element().unwrap();
        let brk = speak.children()[0].as_element().unwrap();
        let attr: &Attribute = &brk.attributes()[0];
        assert_eq!((attr.name.as_str(), attr.value.as_str()), ("time", "2s"));
        assert_eq!(flatten(&node), "ok");
        assert_eq!(unescape("&gt;"), ">");
    }
}
