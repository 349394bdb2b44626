//! Configuration management for weft.
//!
//! Parses `weft.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The `[document]`
//! section supplies the defaults the specialization pipeline falls back to
//! when a document does not author the corresponding attribute; an
//! authored attribute always wins over configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use weft_html::SpecializeOptions;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "weft.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document defaults.
    pub document: DocumentConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Document defaults for the specialization pipeline.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Default document type identifier (e.g. `xhtml1-strict`).
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    /// Default language code.
    pub language: Option<String>,
    /// Default charset.
    pub encoding: Option<String>,
    /// Site-wide favicon href.
    pub favicon: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `weft.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// A configured document type must name a recognized identifier; the
    /// error message enumerates the valid ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(doc_type) = &self.document.doc_type
            && weft_html::lookup(doc_type).is_none()
        {
            let known: Vec<_> = weft_html::known_ids().collect();
            return Err(ConfigError::Validation(format!(
                "document.type `{doc_type}` is not recognized (recognized types: {})",
                known.join(", ")
            )));
        }
        if let Some(encoding) = &self.document.encoding
            && encoding.is_empty()
        {
            return Err(ConfigError::Validation(
                "document.encoding cannot be empty".to_owned(),
            ));
        }
        if let Some(language) = &self.document.language
            && language.is_empty()
        {
            return Err(ConfigError::Validation(
                "document.language cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Convert into pipeline options, applying configured defaults over
    /// the shipped ones.
    #[must_use]
    pub fn to_options(&self) -> SpecializeOptions {
        let mut options = SpecializeOptions::new();
        if let Some(doc_type) = &self.document.doc_type {
            options = options.with_default_type(doc_type.clone());
        }
        if let Some(language) = &self.document.language {
            options = options.with_default_language(language.clone());
        }
        if let Some(encoding) = &self.document.encoding {
            options = options.with_default_encoding(encoding.clone());
        }
        if let Some(favicon) = &self.document.favicon {
            options = options.with_default_favicon(favicon.clone());
        }
        options
    }
}
