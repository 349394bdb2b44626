//! Recognized document types.
//!
//! Each identifier maps to the literal doctype string prepended by the
//! doctype pass and the serialization flavor the rest of the pipeline keys
//! on. The XML flag coincides with the identifier starting with a
//! lowercase `x`; the registry stores it explicitly so nothing downstream
//! has to re-derive it from the spelling.

use weft_doctree::AttrSet;

use crate::error::SpecializeError;
use crate::options::SpecializeOptions;

/// A recognized document type.
#[derive(Debug)]
pub struct DocType {
    /// Identifier authored in the `type` attribute.
    pub id: &'static str,
    /// Literal doctype declaration.
    pub doctype: &'static str,
    /// Whether the serialization is XML-flavored (XHTML).
    pub xml: bool,
}

/// Identifier used when a document carries no `type` attribute.
pub const DEFAULT_ID: &str = "html401-strict";

/// Registry of recognized document types. Extend as needed.
static REGISTRY: &[DocType] = &[
    DocType {
        id: "html32",
        doctype: r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">"#,
        xml: false,
    },
    DocType {
        id: "html401-strict",
        doctype: r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
        xml: false,
    },
    DocType {
        id: "html401-transitional",
        doctype: r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#,
        xml: false,
    },
    DocType {
        id: "html401-frameset",
        doctype: r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#,
        xml: false,
    },
    DocType {
        id: "xhtml1-strict",
        doctype: r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#,
        xml: true,
    },
    DocType {
        id: "xhtml1-transitional",
        doctype: r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
        xml: true,
    },
    DocType {
        id: "xhtml1-frameset",
        doctype: r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#,
        xml: true,
    },
    DocType {
        id: "xhtml11",
        doctype: r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#,
        xml: true,
    },
];

/// Look up a recognized identifier.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static DocType> {
    REGISTRY.iter().find(|doc_type| doc_type.id == id)
}

/// All recognized identifiers, registry order.
pub fn known_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|doc_type| doc_type.id)
}

/// Comma-separated recognized identifiers, for diagnostics.
#[must_use]
pub fn known_ids_joined() -> String {
    known_ids().collect::<Vec<_>>().join(", ")
}

/// Resolve the `type` attribute against the registry.
///
/// A missing attribute falls back to the configured default; an
/// unrecognized identifier is fatal, and the error message enumerates
/// every recognized one.
///
/// # Errors
///
/// [`SpecializeError::UnknownDocumentType`] for unrecognized identifiers.
pub fn resolve(
    attrs: &AttrSet,
    options: &SpecializeOptions,
) -> Result<&'static DocType, SpecializeError> {
    let id = attrs
        .values_or("type", &[options.default_type.as_str()])
        .join(" ");
    lookup(&id).ok_or_else(|| SpecializeError::UnknownDocumentType {
        given: id,
        known: known_ids_joined(),
    })
}
