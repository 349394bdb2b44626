//! Built-in transformation passes.
//!
//! Each pass is a pure function with the uniform signature
//! `(view, tree, options) -> tree'`. The runner re-resolves `view` from
//! the current tree before every call, so a pass always observes the
//! edits of the passes before it.

pub(crate) mod autoclose;
pub(crate) mod cleanup;
pub(crate) mod doctype;
pub(crate) mod meta;
pub(crate) mod structure;
pub(crate) mod variant;

use weft_doctree::{Identity, Node};

use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::pipeline::TargetView;

/// Uniform pass signature.
pub(crate) type PassFn =
    fn(&TargetView, &[Node], &SpecializeOptions) -> Result<Vec<Node>, SpecializeError>;

/// The target vanished from the tree: a contract violation by some pass.
pub(crate) fn target_missing(identity: Identity) -> SpecializeError {
    SpecializeError::PathNotFound {
        path: format!("element {identity}"),
    }
}
