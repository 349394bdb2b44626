//! Error taxonomy for the specialization pipeline.

use weft_doctree::PathNotFound;

/// Fatal specialization failure.
///
/// The pipeline has no recovery or retry path: every variant aborts the
/// whole run with no partial output. The transformation is deterministic
/// and side-effect free, so any failure reproduces given the same input.
#[derive(Debug, thiserror::Error)]
pub enum SpecializeError {
    /// The document starts with a hand-authored `<!DOCTYPE` line.
    ///
    /// Doctypes are derived from the `type` attribute; authors never write
    /// them directly.
    #[error(
        "manual <!DOCTYPE declarations are not allowed; \
         set the `type` attribute on the document tag instead"
    )]
    ManualDoctypeForbidden,

    /// The `type` attribute named an unrecognized document type.
    #[error("unknown document type `{given}` (recognized types: {known})")]
    UnknownDocumentType {
        /// The identifier as authored.
        given: String,
        /// Comma-separated recognized identifiers.
        known: String,
    },

    /// An expected structural node was missing.
    ///
    /// A contract violation between passes (an earlier pass should have
    /// guaranteed the node), not a user error.
    #[error("no element matches path `{path}`")]
    PathNotFound {
        /// The path or identity that failed to resolve.
        path: String,
    },
}

impl From<PathNotFound> for SpecializeError {
    fn from(err: PathNotFound) -> Self {
        Self::PathNotFound { path: err.path }
    }
}
