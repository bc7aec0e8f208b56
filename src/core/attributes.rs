//! SSML Attribute Parsing
//!
//! Parses `name="value"` / `name='value'` tokens from the raw text between a
//! tag name and its closing `>` or `/>`. A bare name is an error, not an
//! HTML-style boolean attribute.

use super::entities::unescape;
use super::scanner::Scanner;
use crate::error::ParseError;

/// A parsed attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name (may include a `prefix:`)
    pub name: String,
    /// Quote-stripped value with entities decoded
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parse attributes from raw tag content (after the element name)
///
/// Attributes come back in order of appearance; duplicates are kept.
/// Values are entity-decoded exactly once, here.
/// Characters that cannot start a name (stray `/`, punctuation) are skipped.
pub fn parse_attributes(input: &str) -> Result<Vec<Attribute>, ParseError> {
    let mut attrs = Vec::new();
    let mut scanner = Scanner::new(input);

    while !scanner.is_eof() {
        let name = match scanner.read_attr_name() {
            Some(name) => name,
            None => {
                scanner.skip_char();
                continue;
            }
        };

        scanner.skip_whitespace();
        if !scanner.eat(b'=') {
            return Err(ParseError::MalformedAttribute(name.to_string()));
        }
        scanner.skip_whitespace();

        let quote = match scanner.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(ParseError::MalformedAttribute(name.to_string())),
        };
        scanner.advance(1);
        let value_start = scanner.position();

        let Some(value_end) = scanner.find_byte(quote) else {
            return Err(ParseError::MalformedAttribute(name.to_string()));
        };

        let value = unescape(scanner.slice(value_start, value_end));
        attrs.push(Attribute::new(name, value));
        scanner.set_position(value_end + 1);
    }

    Ok(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_attributes() {
        let attrs = parse_attributes(" rate=\"slow\" pitch=\"+2st\"").unwrap();
        assert_eq!(
            attrs,
            vec![Attribute::new("rate", "slow"), Attribute::new("pitch", "+2st")]
        );
    }

    #[test]
    fn test_single_quoted() {
        let attrs = parse_attributes("time='1s'").unwrap();
        assert_eq!(attrs, vec![Attribute::new("time", "1s")]);
    }

    #[test]
    fn test_mixed_quotes_inside_value() {
        let attrs = parse_attributes("alias=\"it's\" x='say \"hi\"'").unwrap();
        assert_eq!(attrs[0].value, "it's");
        assert_eq!(attrs[1].value, "say \"hi\"");
    }

    #[test]
    fn test_namespaced_attribute() {
        let attrs = parse_attributes(" xml:lang=\"en-US\"").unwrap();
        assert_eq!(attrs, vec![Attribute::new("xml:lang", "en-US")]);
    }

    #[test]
    fn test_equals_inside_value() {
        let attrs = parse_attributes("src=\"a?b=c\"").unwrap();
        assert_eq!(attrs[0].value, "a?b=c");
    }

    #[test]
    fn test_entity_in_value() {
        let attrs = parse_attributes("alias=\" &lt;x&gt; \" b='&amp;lt;'").unwrap();
        assert_eq!(attrs[0].value, " <x> ");
        assert_eq!(attrs[1].value, "&lt;");
    }

    #[test]
    fn test_duplicates_preserved() {
        let attrs = parse_attributes("a='1' a='2'").unwrap();
        assert_eq!(attrs, vec![Attribute::new("a", "1"), Attribute::new("a", "2")]);
    }

    #[test]
    fn test_empty_attributes() {
        assert!(parse_attributes("").unwrap().is_empty());
        assert!(parse_attributes("   ").unwrap().is_empty());
        assert!(parse_attributes(" /").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_handling() {
        let attrs = parse_attributes("  time  =  \"500ms\"  ").unwrap();
        assert_eq!(attrs, vec![Attribute::new("time", "500ms")]);
    }

    #[test]
    fn test_bare_name_rejected() {
        assert_eq!(
            parse_attributes("attr"),
            Err(ParseError::MalformedAttribute("attr".to_string()))
        );
        assert_eq!(
            parse_attributes("a='1' b"),
            Err(ParseError::MalformedAttribute("b".to_string()))
        );
    }

    #[test]
    fn test_unquoted_value_rejected() {
        assert_eq!(
            parse_attributes("time=1s"),
            Err(ParseError::MalformedAttribute("time".to_string()))
        );
    }

    #[test]
    fn test_unterminated_quote_rejected() {
        assert_eq!(
            parse_attributes("time=\"1s"),
            Err(ParseError::MalformedAttribute("time".to_string()))
        );
    }
}
