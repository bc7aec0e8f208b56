//! Elixir Term Conversion Utilities
//!
//! Converts parsed SSML trees and parse errors to Elixir terms:
//! - element: `{:element, name, [{attr_name, attr_value}], children}`
//! - text: a binary
//! - error: `{:error, {kind, message}}`

use crate::dom::Node;
use crate::error::{ErrorKind, ParseError};
use rustler::{Encoder, Env, NewBinary, Term};

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
    element,
    malformed_document,
    invalid_root,
    mismatched_tag,
    malformed_attribute,
}

/// Convert a node to an Elixir term
pub fn node_to_term<'a>(env: Env<'a>, node: &Node) -> Term<'a> {
    match node {
        Node::Text(text) => str_to_binary(env, text),
        Node::Element(el) => {
            // Build lists in reverse order so prepend keeps document order
            let mut attrs = Term::list_new_empty(env);
            for attr in el.attributes.iter().rev() {
                let attr_tuple = (str_to_binary(env, &attr.name), str_to_binary(env, &attr.value));
                attrs = attrs.list_prepend(attr_tuple.encode(env));
            }

            let mut children = Term::list_new_empty(env);
            for child in el.children.iter().rev() {
                children = children.list_prepend(node_to_term(env, child));
            }

            (element(), str_to_binary(env, &el.name), attrs, children).encode(env)
        }
    }
}

/// `{:error, {kind, message}}`
pub fn error_to_term<'a>(env: Env<'a>, err: &ParseError) -> Term<'a> {
    let kind = match err.kind() {
        ErrorKind::MalformedDocument => malformed_document(),
        ErrorKind::InvalidRoot => invalid_root(),
        ErrorKind::MismatchedTag => mismatched_tag(),
        ErrorKind::MalformedAttribute => malformed_attribute(),
    };
    (error(), (kind, err.to_string())).encode(env)
}

/// `{:ok, tree}` or `{:error, {kind, message}}`
pub fn parse_result_to_term<'a>(env: Env<'a>, result: &Result<Node, ParseError>) -> Term<'a> {
    match result {
        Ok(node) => (ok(), node_to_term(env, node)).encode(env),
        Err(err) => error_to_term(env, err),
    }
}

/// `{:ok, text}` or `{:error, {kind, message}}`
pub fn text_result_to_term<'a>(env: Env<'a>, result: &Result<String, ParseError>) -> Term<'a> {
    match result {
        Ok(text) => (ok(), str_to_binary(env, text)).encode(env),
        Err(err) => error_to_term(env, err),
    }
}

/// Convert a list of results, keeping input order
pub fn results_to_term<'a, T>(
    env: Env<'a>,
    results: &[Result<T, ParseError>],
    convert: impl Fn(Env<'a>, &Result<T, ParseError>) -> Term<'a>,
) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for result in results.iter().rev() {
        list = list.list_prepend(convert(env, result));
    }
    list
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
