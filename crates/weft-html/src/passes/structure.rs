//! Structure pass: canonical `[head, body]` wrapping.

use weft_doctree::{Element, Node, update_by_identity};

use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::passes::target_missing;
use crate::pipeline::TargetView;

/// Rewrite the target's children to exactly `[head, body]`.
///
/// An existing `head` is extracted and reused, otherwise an empty one is
/// synthesized. An existing `body` is used verbatim; without one, all
/// remaining siblings become the new body's content. Content that sits
/// beside an explicit `body` is folded into the end of that body rather
/// than dropped (newline layout hints at that level are discarded, the
/// level itself disappears).
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    _options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    let mut rest = view.children.clone();

    let head = take_element(&mut rest, "head").unwrap_or_else(|| Element::new("head"));

    let body = match take_element(&mut rest, "body") {
        Some(mut body) => {
            let leftovers: Vec<Node> = rest
                .drain(..)
                .filter(|node| !matches!(node, Node::Newline))
                .collect();
            if !leftovers.is_empty() {
                tracing::warn!(
                    count = leftovers.len(),
                    "content beside an explicit body; folding it into the body"
                );
                body.children.extend(leftovers);
            }
            body
        }
        None => Element::new("body").with_children(rest),
    };

    update_by_identity(tree, view.identity, |element| {
        element.children = vec![head.into(), body.into()];
    })
    .ok_or_else(|| target_missing(view.identity))
}

/// Remove and return the first child element named `name`.
fn take_element(nodes: &mut Vec<Node>, name: &str) -> Option<Element> {
    let idx = nodes
        .iter()
        .position(|node| node.as_element().is_some_and(|element| element.name == name))?;
    match nodes.remove(idx) {
        Node::Element(element) => Some(element),
        _ => None,
    }
}
