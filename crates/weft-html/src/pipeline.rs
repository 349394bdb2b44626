//! The specialization pipeline runner.

use weft_doctree::{AttrSet, Identity, Node, find_by_identity, serialize};

use crate::doctypes::{self, DocType};
use crate::error::SpecializeError;
use crate::hook::HookPass;
use crate::options::SpecializeOptions;
use crate::passes::{self, PassFn, target_missing};

/// Snapshot of the target element, re-taken before every pass.
///
/// Passes replace the tree wholesale, so a view is only valid for the one
/// pass it was resolved for. The runner owns this discipline; passes just
/// read the view they are handed.
#[derive(Clone, Debug)]
pub struct TargetView {
    /// The target's identity token.
    pub identity: Identity,
    /// The target's attributes at resolution time.
    pub attrs: AttrSet,
    /// The target's children at resolution time.
    pub children: Vec<Node>,
}

/// Built-in passes ahead of the hook slot, pipeline order.
const PASSES_BEFORE_HOOKS: [(&str, PassFn); 4] = [
    ("doctype", passes::doctype::run),
    ("structure", passes::structure::run),
    ("variant", passes::variant::run),
    ("meta", passes::meta::run),
];

/// Built-in passes after the hook slot, pipeline order.
const PASSES_AFTER_HOOKS: [(&str, PassFn); 2] = [
    ("autoclose", passes::autoclose::run),
    ("cleanup", passes::cleanup::run),
];

/// Rewrites a parsed document tree into a spec-compliant (X)HTML document.
///
/// The pipeline is a fold of pure passes over the whole tree, in a fixed
/// order: doctype, structure, variant, meta-synthesis, registered hooks,
/// autoclose, cleanup. Before each pass the target element is re-resolved
/// from the current tree by identity, so every pass observes its
/// predecessors' edits. The first error aborts the run with no partial
/// output.
///
/// # Example
///
/// ```
/// use weft_doctree::{Element, Identity, Node};
/// use weft_html::Specializer;
///
/// let target = Identity::new(1);
/// let page = Element::special("html")
///     .with_identity(target)
///     .with_children(vec![Node::text("Hello")]);
///
/// let mut specializer = Specializer::new();
/// let output = specializer.render(vec![page.into()], target).unwrap();
/// assert!(output.starts_with("<!DOCTYPE HTML"));
/// assert!(output.contains("<body>Hello</body>"));
/// ```
pub struct Specializer {
    options: SpecializeOptions,
    hooks: Vec<Box<dyn HookPass>>,
}

impl Default for Specializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Specializer {
    /// Create a specializer with default options and no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SpecializeOptions::default())
    }

    /// Create a specializer with the given options.
    #[must_use]
    pub fn with_options(options: SpecializeOptions) -> Self {
        Self {
            options,
            hooks: Vec::new(),
        }
    }

    /// Register a hook pass.
    ///
    /// Hooks run in registration order, between meta-synthesis and
    /// autoclose.
    #[must_use]
    pub fn with_hook<H: HookPass + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Run the pipeline, returning the specialized tree.
    ///
    /// `target` is the identity of the `Special`-kind `html` element the
    /// caller assigned at parse time.
    ///
    /// # Errors
    ///
    /// Any [`SpecializeError`]; the input tree is never partially
    /// transformed on failure (the caller keeps its own value).
    pub fn run(
        &mut self,
        tree: Vec<Node>,
        target: Identity,
    ) -> Result<Vec<Node>, SpecializeError> {
        self.run_pipeline(tree, target).map(|(tree, _)| tree)
    }

    /// Run the pipeline and serialize the result.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn render(
        &mut self,
        tree: Vec<Node>,
        target: Identity,
    ) -> Result<String, SpecializeError> {
        let (tree, doc_type) = self.run_pipeline(tree, target)?;
        Ok(serialize(&tree, doc_type.xml))
    }

    fn run_pipeline(
        &mut self,
        mut tree: Vec<Node>,
        target: Identity,
    ) -> Result<(Vec<Node>, &'static DocType), SpecializeError> {
        for (name, pass) in PASSES_BEFORE_HOOKS {
            let view = resolve_view(&tree, target)?;
            tracing::debug!(pass = name, "running specialization pass");
            tree = pass(&view, &tree, &self.options)?;
        }

        // The doctype pass validated the type attribute, and cleanup has
        // not yet removed it; remember the flavor for serialization.
        let doc_type = doctypes::resolve(&resolve_view(&tree, target)?.attrs, &self.options)?;

        for hook in &mut self.hooks {
            let view = resolve_view(&tree, target)?;
            tracing::debug!(hook = hook.name(), "running hook pass");
            tree = hook.run(&view, &tree, &self.options)?;
        }

        for (name, pass) in PASSES_AFTER_HOOKS {
            let view = resolve_view(&tree, target)?;
            tracing::debug!(pass = name, "running specialization pass");
            tree = pass(&view, &tree, &self.options)?;
        }

        Ok((tree, doc_type))
    }
}

/// Re-resolve the target's current attributes and children.
fn resolve_view(tree: &[Node], target: Identity) -> Result<TargetView, SpecializeError> {
    let element = find_by_identity(tree, target).ok_or_else(|| target_missing(target))?;
    Ok(TargetView {
        identity: target,
        attrs: element.attrs.clone(),
        children: element.children.clone(),
    })
}
