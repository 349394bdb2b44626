//! Pipeline options.

use crate::doctypes;

/// Options threaded through every pass and hook.
///
/// This is the opaque configuration record of the pipeline's call
/// contract: the caller builds it once and the runner hands the same
/// value, unmodified, to each pass. The defaults here feed attribute
/// resolution, so an attribute authored on the document always wins over
/// anything configured.
#[derive(Clone, Debug)]
pub struct SpecializeOptions {
    /// Document type used when no `type` attribute is authored.
    pub default_type: String,
    /// Language code for `xml:lang` and the `Content-Language` meta.
    pub default_language: String,
    /// Charset for the `Content-Type` meta.
    pub default_encoding: String,
    /// Site-wide favicon href. `None` keeps the favicon links out of
    /// documents that do not ask for them.
    pub default_favicon: Option<String>,
}

impl Default for SpecializeOptions {
    fn default() -> Self {
        Self {
            default_type: doctypes::DEFAULT_ID.to_owned(),
            default_language: "en".to_owned(),
            default_encoding: "iso-8859-1".to_owned(),
            default_favicon: None,
        }
    }
}

impl SpecializeOptions {
    /// Create options with the shipped defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback document type.
    #[must_use]
    pub fn with_default_type(mut self, id: impl Into<String>) -> Self {
        self.default_type = id.into();
        self
    }

    /// Set the fallback language code.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Set the fallback charset.
    #[must_use]
    pub fn with_default_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.default_encoding = encoding.into();
        self
    }

    /// Set a site-wide favicon href.
    #[must_use]
    pub fn with_default_favicon(mut self, href: impl Into<String>) -> Self {
        self.default_favicon = Some(href.into());
        self
    }
}
