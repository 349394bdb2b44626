//! Autoclose pass: canonical closing shape for empty elements.

use weft_doctree::Node;

use crate::doctypes;
use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::pipeline::TargetView;

/// Tags that never have rendered content.
const VOID_TAGS: &[&str] = &[
    "meta", "img", "link", "br", "hr", "input", "area", "param", "col", "base",
];

/// Rewrite every empty element in the tree into its canonical closing
/// shape for the resolved flavor.
///
/// An element is "empty" when it has no children or exactly one newline
/// layout hint. Known void tags under the XML flavor keep an empty child
/// list (the serializer self-closes them); everything else gets a single
/// empty-string text child, which forces an explicit closing tag. Applies
/// to the whole document tree, not just the target subtree.
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    let xml = doctypes::resolve(&view.attrs, options)?.xml;
    Ok(tree.iter().map(|node| rewrite(node, xml)).collect())
}

/// Canonical children for an empty element.
fn close_children(xml: bool, name: &str) -> Vec<Node> {
    let void = VOID_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name));
    if xml && void {
        Vec::new()
    } else {
        vec![Node::text(String::new())]
    }
}

fn is_empty_shape(children: &[Node]) -> bool {
    children.is_empty() || matches!(children, [Node::Newline])
}

/// Pre-order, depth-first, sibling order preserved.
fn rewrite(node: &Node, xml: bool) -> Node {
    match node {
        Node::Element(element) => {
            let mut out = element.clone();
            if is_empty_shape(&element.children) {
                out.children = close_children(xml, &element.name);
            } else {
                out.children = element
                    .children
                    .iter()
                    .map(|child| rewrite(child, xml))
                    .collect();
            }
            Node::Element(out)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use weft_doctree::{Element, Identity, serialize};

    use super::*;

    fn specialize(tree: Vec<Node>, type_attr: &str) -> Vec<Node> {
        let view = TargetView {
            identity: Identity::new(1),
            attrs: {
                let mut attrs = weft_doctree::AttrSet::new();
                attrs.set_one("type", type_attr);
                attrs
            },
            children: Vec::new(),
        };
        run(&view, &tree, &SpecializeOptions::default()).unwrap()
    }

    #[test]
    fn test_void_tag_xml_self_closes() {
        let tree = vec![Element::new("img").with_attr("src", ["x.png"]).into()];
        let out = specialize(tree, "xhtml1-strict");
        assert_eq!(serialize(&out, true), r#"<img src="x.png" />"#);
    }

    #[test]
    fn test_void_tag_non_xml_explicit_close() {
        let tree = vec![Element::new("img").with_attr("src", ["x.png"]).into()];
        let out = specialize(tree, "html401-strict");
        assert_eq!(serialize(&out, false), r#"<img src="x.png"></img>"#);
    }

    #[test]
    fn test_non_void_tag_explicit_close_even_in_xml() {
        let tree = vec![Element::new("div").into()];
        let out = specialize(tree, "xhtml1-strict");
        assert_eq!(serialize(&out, true), "<div></div>");
    }

    #[test]
    fn test_single_newline_child_counts_as_empty() {
        let tree = vec![
            Element::new("br")
                .with_children(vec![Node::Newline])
                .into(),
        ];
        let out = specialize(tree, "xhtml1-strict");
        assert_eq!(serialize(&out, true), "<br />");
    }

    #[test]
    fn test_recurses_into_non_empty_elements() {
        let tree = vec![
            Element::new("body")
                .with_children(vec![
                    Node::text("a"),
                    Element::new("hr").into(),
                    Element::new("p")
                        .with_children(vec![Element::new("br").into()])
                        .into(),
                ])
                .into(),
        ];
        let out = specialize(tree, "xhtml1-strict");
        assert_eq!(serialize(&out, true), "<body>a<hr /><p><br /></p></body>");
    }

    #[test]
    fn test_non_elements_pass_through() {
        let tree = vec![Node::text("x"), Node::Newline];
        let out = specialize(tree.clone(), "html401-strict");
        assert_eq!(out, tree);
    }

    #[test]
    fn test_case_insensitive_void_match() {
        let tree = vec![Element::new("IMG").into()];
        let out = specialize(tree, "xhtml1-strict");
        assert_eq!(serialize(&out, true), "<img />");
    }
}
