//! Parse errors
//!
//! Every failure aborts the whole parse; there is no partial tree and no
//! warning tier. The first violation found in document order is reported.

use thiserror::Error;

/// Error raised while parsing an SSML document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not wrapped in `<...>` or holds no tag structure at all
    #[error("invalid SSML: {0}")]
    MalformedDocument(&'static str),

    /// The top-level element is not `<speak>`
    #[error("invalid SSML: root tag must be <speak>, found <{0}>")]
    InvalidRoot(String),

    /// Opening and closing tags disagree, a tag closes with nothing open,
    /// or an opened tag is never closed
    #[error("invalid SSML: mismatched tag: {0}")]
    MismatchedTag(String),

    /// An attribute token has no `="value"` part
    #[error("invalid SSML: attribute `{0}` has no value")]
    MalformedAttribute(String),
}

/// Fieldless discriminant of [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedDocument,
    InvalidRoot,
    MismatchedTag,
    MalformedAttribute,
}

impl ErrorKind {
    /// Snake-case name, used for atoms on the Elixir side
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedDocument => "malformed_document",
            ErrorKind::InvalidRoot => "invalid_root",
            ErrorKind::MismatchedTag => "mismatched_tag",
            ErrorKind::MalformedAttribute => "malformed_attribute",
        }
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedDocument(_) => ErrorKind::MalformedDocument,
            ParseError::InvalidRoot(_) => ErrorKind::InvalidRoot,
            ParseError::MismatchedTag(_) => ErrorKind::MismatchedTag,
            ParseError::MalformedAttribute(_) => ErrorKind::MalformedAttribute,
        }
    }
}
