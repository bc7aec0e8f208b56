//! Text extraction
//!
//! Flattens a tree back into plain text by concatenating every text leaf
//! in document order. Tags and attributes contribute nothing.

use super::node::Node;

/// Concatenate all text in `node`, in document order
pub fn flatten(node: &Node) -> String {
    let mut result = String::new();
    collect_text_content(node, &mut result);
    result
}

/// Recursively collect text content from descendants
fn collect_text_content(node: &Node, result: &mut String) {
    match node {
        Node::Text(text) => result.push_str(text),
        Node::Element(element) => {
            for child in &element.children {
                collect_text_content(child, result);
            }
        }
    }
}
