//! SSML Node representation
//!
//! A parsed document is a plain owned tree: text leaves and elements.
//! Trees are built bottom-up by the parser and never mutated afterwards.

use super::text::flatten;
use crate::core::attributes::Attribute;
use std::fmt;

/// A node in a parsed SSML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, whitespace preserved verbatim
    Text(String),
    /// Element with attributes and children
    Element(Element),
}

/// An SSML element such as `<speak>`, `<prosody>` or `<break/>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name (non-empty ASCII word characters)
    pub name: String,
    /// Attributes in order of appearance, duplicates kept
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Element name, `None` for text
    pub fn name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }
}

impl Element {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Get attribute value by name
    ///
    /// With duplicates the last one wins, as if inserted into a map in order.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Check if this element has children
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Displays the flattened text content
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&flatten(self))
    }
}
