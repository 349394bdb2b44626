//! Doctype pass: reject manual doctypes, prepend the resolved one.

use weft_doctree::Node;

use crate::doctypes;
use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::pipeline::TargetView;

/// Prepend the doctype declaration resolved from the `type` attribute.
///
/// A document whose first top-level item is text beginning with a
/// `<!DOCTYPE` token was hand-authored and is rejected outright.
pub(crate) fn run(
    view: &TargetView,
    tree: &[Node],
    options: &SpecializeOptions,
) -> Result<Vec<Node>, SpecializeError> {
    if let Some(Node::Text(text)) = tree.first()
        && let Some(first_token) = text.split_whitespace().next()
        && first_token.eq_ignore_ascii_case("<!DOCTYPE")
    {
        return Err(SpecializeError::ManualDoctypeForbidden);
    }

    let doc_type = doctypes::resolve(&view.attrs, options)?;
    tracing::trace!(doc_type = doc_type.id, "resolved document type");

    let mut out = Vec::with_capacity(tree.len() + 1);
    out.push(Node::text(doc_type.doctype));
    out.extend(tree.iter().cloned());
    Ok(out)
}
