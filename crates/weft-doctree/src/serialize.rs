//! Linearize a finished tree to markup text.

use std::fmt::Write;

use crate::node::{Element, Node};

/// Serialize a tree to a single markup string.
///
/// - Text fragments are emitted verbatim; entity escaping is an upstream
///   concern and fragments are opaque here.
/// - Newline layout hints emit nothing.
/// - An element with children renders as `<name attrs>children</name>`;
///   with no children it renders self-closed (`<name attrs />`). The
///   autoclose stage decides which elements end up childless: an
///   empty-string text child counts as "has children" and forces the
///   explicit closing tag.
/// - Attribute tokens are joined with single spaces; attribute order is the
///   set's insertion order.
/// - The XML flavor lowercases element names at output time; nothing else
///   touches name case.
#[must_use]
pub fn serialize(tree: &[Node], xml: bool) -> String {
    let mut out = String::with_capacity(1024);
    for node in tree {
        write_node(&mut out, node, xml);
    }
    out
}

fn write_node(out: &mut String, node: &Node, xml: bool) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Newline => {}
        Node::Element(element) => write_element(out, element, xml),
    }
}

fn write_element(out: &mut String, element: &Element, xml: bool) {
    let name = if xml {
        element.name.to_ascii_lowercase()
    } else {
        element.name.clone()
    };

    out.push('<');
    out.push_str(&name);
    for (attr_name, values) in element.attrs.iter() {
        write!(out, r#" {}="{}""#, attr_name, values.join(" ")).unwrap();
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child, xml);
    }
    write!(out, "</{name}>").unwrap();
}
