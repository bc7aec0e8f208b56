//! Core SSML parsing primitives
//!
//! This module contains the building blocks the document parser uses:
//! - Scanner: memchr-accelerated delimiter detection
//! - Tokenizer: tag recognition and fragment splitting
//! - Entities: decoding of &lt; &gt; &amp; with Cow (zero-copy when possible)
//! - Attributes: attribute parsing and extraction

pub mod attributes;
pub mod entities;
pub mod scanner;
pub mod tokenizer;
