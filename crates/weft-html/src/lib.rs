//! (X)HTML document specialization for the weft compiler.
//!
//! The parser hands over a generic attributed tree containing one
//! `Special`-kind `html` element; this crate rewrites that tree into a
//! spec-compliant (X)HTML document ready for serialization. The work is an
//! ordered fold of pure passes ([`Specializer`]):
//!
//! 1. doctype — reject hand-authored doctypes, prepend the one resolved
//!    from the `type` attribute
//! 2. structure — canonical `[head, body]` wrapping
//! 3. variant — `xmlns`/`xml:lang` injection for XML-flavored types
//! 4. meta-synthesis — derive `meta`/`title`/`link` head nodes from
//!    document attributes
//! 5. registered [`HookPass`]es (stylesheet/image linking, script
//!    embedding)
//! 6. autoclose — canonical closing shape for empty elements
//! 7. cleanup — strip pipeline bookkeeping attributes
//!
//! # Example
//!
//! ```
//! use weft_doctree::{Element, Identity, Node};
//! use weft_html::{Specializer, SpecializeOptions};
//!
//! let target = Identity::new(1);
//! let page = Element::special("html")
//!     .with_identity(target)
//!     .with_attr("type", ["xhtml1-strict"])
//!     .with_attr("title", ["Hello"])
//!     .with_children(vec![Node::text("Hello, world.")]);
//!
//! let options = SpecializeOptions::new().with_default_encoding("utf-8");
//! let mut specializer = Specializer::with_options(options);
//! let output = specializer.render(vec![page.into()], target).unwrap();
//!
//! assert!(output.starts_with("<!DOCTYPE html"));
//! assert!(output.contains("<title>Hello</title>"));
//! ```

mod doctypes;
mod error;
mod hook;
mod options;
mod passes;
mod pipeline;

pub use doctypes::{DEFAULT_ID, DocType, known_ids, lookup};
pub use error::SpecializeError;
pub use hook::HookPass;
pub use options::SpecializeOptions;
pub use pipeline::{Specializer, TargetView};
