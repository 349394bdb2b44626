//! Attributed document tree model for the weft compiler.
//!
//! The parser produces a generic tagged tree ([`Node`]) in which elements
//! carry an ordered attribute set ([`AttrSet`]) and an ordered child list.
//! Downstream stages thread whole-tree values through pure transformations:
//! a stage never mutates a tree it was handed, it builds a replacement.
//!
//! Addressing comes in two forms:
//! - [`NodePath`] for structural first-match lookups from the root sequence
//!   (e.g. `html/head`), and
//! - [`Identity`] tokens for elements that must survive wholesale tree
//!   replacement, such as the document root a pipeline is specializing.
//!
//! [`serialize`] linearizes a finished tree back to markup text.

mod attrs;
mod node;
mod path;
mod serialize;

pub use attrs::AttrSet;
pub use node::{Element, ElementKind, Identity, Node};
pub use path::{
    NodePath, PathNotFound, append_children, find, find_by_identity, replace_children,
    update_by_identity,
};
pub use serialize::serialize;
