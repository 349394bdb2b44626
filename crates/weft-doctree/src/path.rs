//! Structural and identity-based tree addressing.
//!
//! Trees are replaced wholesale by transformation passes, so references into
//! a tree never survive a pass. Lookups therefore re-run against the current
//! tree value: structurally via [`NodePath`] (first name match at each
//! level), or by [`Identity`] token for elements that must stay addressable
//! across arbitrary restructuring.
//!
//! All edit operations are pure: they take a tree slice and return a new
//! tree, leaving the input untouched.

use std::fmt;

use crate::node::{Element, Identity, Node};

/// Structural address: one tag-name segment per tree level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Build a path from name segments, root-first.
    #[must_use]
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The name segments, root-first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// No element matched a structural path.
///
/// Raised when a caller required the addressed node to exist. Within a
/// pipeline this is a contract violation (an earlier pass should have put
/// the node there), not a user error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no element matches path `{path}`")]
pub struct PathNotFound {
    /// The path that failed to resolve.
    pub path: String,
}

/// First-match structural lookup.
///
/// At each level the first element whose name equals the segment wins;
/// there is no backtracking into later siblings. Returns `None` for an
/// empty path.
#[must_use]
pub fn find<'t>(tree: &'t [Node], path: &NodePath) -> Option<&'t Element> {
    let mut nodes = tree;
    let mut current = None;
    for segment in path.segments() {
        let element = nodes
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.name == *segment)?;
        nodes = &element.children;
        current = Some(element);
    }
    current
}

/// Depth-first search for the element carrying `identity`.
#[must_use]
pub fn find_by_identity<'t>(tree: &'t [Node], identity: Identity) -> Option<&'t Element> {
    for node in tree {
        if let Some(element) = node.as_element() {
            if element.identity == Some(identity) {
                return Some(element);
            }
            if let Some(found) = find_by_identity(&element.children, identity) {
                return Some(found);
            }
        }
    }
    None
}

/// Return a new tree in which the element at `path` has `children`.
///
/// # Errors
///
/// [`PathNotFound`] if nothing matches the path.
pub fn replace_children(
    tree: &[Node],
    path: &NodePath,
    children: Vec<Node>,
) -> Result<Vec<Node>, PathNotFound> {
    let mut out = tree.to_vec();
    if edit_first_match(&mut out, path.segments(), |element| {
        element.children = children;
    }) {
        Ok(out)
    } else {
        Err(PathNotFound {
            path: path.to_string(),
        })
    }
}

/// Return a new tree in which `nodes` are appended to the children of the
/// element at `path`.
///
/// # Errors
///
/// [`PathNotFound`] if nothing matches the path.
pub fn append_children(
    tree: &[Node],
    path: &NodePath,
    nodes: Vec<Node>,
) -> Result<Vec<Node>, PathNotFound> {
    let mut out = tree.to_vec();
    if edit_first_match(&mut out, path.segments(), |element| {
        element.children.extend(nodes);
    }) {
        Ok(out)
    } else {
        Err(PathNotFound {
            path: path.to_string(),
        })
    }
}

/// Return a new tree in which the element carrying `identity` has been
/// edited in place by `edit`. `None` if the identity is absent.
#[must_use]
pub fn update_by_identity<F>(tree: &[Node], identity: Identity, edit: F) -> Option<Vec<Node>>
where
    F: FnOnce(&mut Element),
{
    let mut out = tree.to_vec();
    let mut edit = Some(edit);
    if edit_identity(&mut out, identity, &mut edit) {
        Some(out)
    } else {
        None
    }
}

fn edit_first_match<F>(nodes: &mut [Node], segments: &[String], edit: F) -> bool
where
    F: FnOnce(&mut Element),
{
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };
    for node in nodes.iter_mut() {
        if let Some(element) = node.as_element_mut()
            && element.name == *first
        {
            if rest.is_empty() {
                edit(element);
                return true;
            }
            return edit_first_match(&mut element.children, rest, edit);
        }
    }
    false
}

fn edit_identity<F>(nodes: &mut [Node], identity: Identity, edit: &mut Option<F>) -> bool
where
    F: FnOnce(&mut Element),
{
    for node in nodes.iter_mut() {
        if let Some(element) = node.as_element_mut() {
            if element.identity == Some(identity) {
                if let Some(edit) = edit.take() {
                    edit(element);
                }
                return true;
            }
            if edit_identity(&mut element.children, identity, edit) {
                return true;
            }
        }
    }
    false
}
