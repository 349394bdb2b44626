//! External hook passes.

use weft_doctree::Node;

use crate::error::SpecializeError;
use crate::options::SpecializeOptions;
use crate::pipeline::TargetView;

/// A caller-supplied transformation pass.
///
/// Hooks are how the stylesheet/image linker and the script embedder plug
/// into the pipeline: registered via
/// [`Specializer::with_hook`](crate::Specializer::with_hook), they run in
/// registration order between meta-synthesis and autoclose, with exactly
/// the shape of a built-in pass. A hook receives a freshly re-resolved
/// view of the target (so it observes every earlier edit), must return a
/// complete tree, and must not retain references to the tree beyond the
/// call.
pub trait HookPass {
    /// Name for diagnostics.
    fn name(&self) -> &str;

    /// Transform the tree.
    ///
    /// `options` is the caller's configuration record, passed through
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Any error aborts the pipeline with no partial output.
    fn run(
        &mut self,
        view: &TargetView,
        tree: &[Node],
        options: &SpecializeOptions,
    ) -> Result<Vec<Node>, SpecializeError>;
}
