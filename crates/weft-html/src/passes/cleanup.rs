//! Cleanup pass: strip pipeline bookkeeping attributes.

use weft_doctree::{Node, update_by_identity};

use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::passes::target_missing;
use crate::pipeline::TargetView;

/// Attributes that only exist to drive earlier passes.
const BOOKKEEPING_ATTRS: &[&str] = &[
    "type",
    "encoding",
    "language",
    "description",
    "keywords",
    "copyright",
    "nosmarttag",
    "title",
    "favicon",
];

/// Remove bookkeeping attributes from the target, leaving only attributes
/// meaningful to a browser (`xmlns`, `xml:lang`, author-supplied ones).
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    _options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    update_by_identity(tree, view.identity, |element| {
        element.attrs.remove_all(BOOKKEEPING_ATTRS);
    })
    .ok_or_else(|| target_missing(view.identity))
}
