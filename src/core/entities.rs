//! Entity Unescaping
//!
//! SSML input may carry three named entities: &lt; &gt; &amp;
//! Tag structure is found on the raw text, where entities hold no brackets;
//! each text leaf and attribute value is then decoded exactly once. A decoded
//! `<` or `>` is therefore always literal text, never a tag delimiter.
//!
//! Uses Cow for zero-copy when no entities are present.

use memchr::memchr;
use std::borrow::Cow;

/// Decode `&lt;`, `&gt;` and `&amp;` in a single left-to-right pass
///
/// Output of a substitution is never rescanned, so `&amp;lt;` becomes
/// `&lt;` and not `<`. Any other `&` sequence is kept as-is.
#[inline]
pub fn unescape(input: &str) -> Cow<'_, str> {
    // Fast path: check if there are any entities using SIMD
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(decode_entities(input))
}

fn decode_entities(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(amp_offset) = memchr(b'&', &bytes[pos..]) {
        let amp_pos = pos + amp_offset;
        result.push_str(&input[pos..amp_pos]);

        let rest = &input[amp_pos..];
        let (decoded, consumed) = if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else if rest.starts_with("&amp;") {
            ('&', 5)
        } else {
            ('&', 1)
        };
        result.push(decoded);
        pos = amp_pos + consumed;
    }

    result.push_str(&input[pos..]);
    result
}
