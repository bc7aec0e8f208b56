//! Parsing Strategy Module
//!
//! - Parallel: many independent documents at once, for batch callers

pub mod parallel;

pub use parallel::{parse_parallel, parse_to_text_parallel};
