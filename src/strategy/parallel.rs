//! Parallel Document Parsing
//!
//! Uses Rayon to parse independent documents concurrently. Parsing shares
//! no state between documents, so each one runs on its own.

use crate::dom::{parse, Node};
use crate::error::ParseError;
use crate::{decode_input, parse_to_text};
use rayon::prelude::*;

/// Parse multiple documents in parallel, one result per input, in order
///
/// Inputs are raw bytes; a document that is not UTF-8 gets its own
/// `MalformedDocument` result without affecting the others.
pub fn parse_parallel<S: AsRef<[u8]> + Sync>(documents: &[S]) -> Vec<Result<Node, ParseError>> {
    documents
        .par_iter()
        .map(|document| decode_input(document.as_ref()).and_then(parse))
        .collect()
}

/// Parse and flatten multiple documents in parallel
pub fn parse_to_text_parallel<S: AsRef<[u8]> + Sync>(
    documents: &[S],
) -> Vec<Result<String, ParseError>> {
    documents
        .par_iter()
        .map(|document| decode_input(document.as_ref()).and_then(parse_to_text))
        .collect()
}
