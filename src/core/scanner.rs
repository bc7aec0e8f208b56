//! SIMD-accelerated markup scanning using memchr
//!
//! All delimiters SSML cares about (`<`, `>`, `/`, `=`, quotes) are ASCII,
//! so byte offsets found here are always valid `str` char boundaries.

use memchr::{memchr, memrchr};

/// Cursor over a markup string
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Create a scanner positioned at `pos`
    #[inline]
    pub fn at(input: &'a str, pos: usize) -> Self {
        Scanner { input, pos }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance past the current char (may be multi-byte)
    #[inline]
    pub fn skip_char(&mut self) {
        if let Some(c) = self.input[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `byte` if it is next
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip Unicode whitespace
    #[inline]
    pub fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Find next '<' (tag start) using SIMD
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        self.find_byte(b'<')
    }

    /// Find next '>' (tag end) using SIMD
    #[inline]
    pub fn find_tag_end(&self) -> Option<usize> {
        self.find_byte(b'>')
    }

    /// Find the last '<' in `[self.pos, end)`
    #[inline]
    pub fn rfind_tag_start(&self, end: usize) -> Option<usize> {
        if end <= self.pos {
            return None;
        }
        memrchr(b'<', &self.input.as_bytes()[self.pos..end]).map(|i| self.pos + i)
    }

    /// Find next occurrence of a specific byte
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        if self.is_eof() {
            return None;
        }
        memchr(byte, &self.input.as_bytes()[self.pos..]).map(|i| self.pos + i)
    }

    /// Read a tag name: one or more ASCII word characters `[A-Za-z0-9_]`
    pub fn read_name(&mut self) -> Option<&'a str> {
        self.read_while(is_name_char)
    }

    /// Read an attribute name: word characters plus ':'
    pub fn read_attr_name(&mut self) -> Option<&'a str> {
        self.read_while(|b| is_name_char(b) || b == b':')
    }

    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(&self.input[start..self.pos])
        }
    }
}

/// Check if byte is an ASCII word character
#[inline]
pub fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_start() {
        let scanner = Scanner::new("hello <world>");
        assert_eq!(scanner.find_tag_start(), Some(6));
        assert_eq!(scanner.find_tag_end(), Some(12));
    }

    #[test]
    fn test_rfind_tag_start() {
        let scanner = Scanner::at("<a>x</a>", 1);
        assert_eq!(scanner.rfind_tag_start(8), Some(4));
        assert_eq!(scanner.rfind_tag_start(4), None);
        assert_eq!(scanner.rfind_tag_start(1), None);
    }

    #[test]
    fn test_read_name() {
        let mut scanner = Scanner::new("say_as2 x");
        assert_eq!(scanner.read_name(), Some("say_as2"));
        assert_eq!(scanner.position(), 7);
        assert_eq!(scanner.read_name(), None);
    }

    #[test]
    fn test_read_name_stops_at_hyphen() {
        let mut scanner = Scanner::new("say-as");
        assert_eq!(scanner.read_name(), Some("say"));
    }

    #[test]
    fn test_read_attr_name() {
        let mut scanner = Scanner::new("xml:lang=");
        assert_eq!(scanner.read_attr_name(), Some("xml:lang"));
        assert_eq!(scanner.peek(), Some(b'='));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut scanner = Scanner::new("  \t\n\u{a0}hello");
        scanner.skip_whitespace();
        assert_eq!(scanner.position(), 6);
        assert_eq!(scanner.peek(), Some(b'h'));
    }
}
