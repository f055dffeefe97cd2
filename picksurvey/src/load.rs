//! Loading question sets from TOML or JSON.
//!
//! Both formats use the same field names; see the crate docs for an example.
//! Every loaded set goes through the same validation as `QuestionSet::new`;
//! a `ConfigError` surfaces as a parse error of the respective format.

use std::path::{Path, PathBuf};

use crate::QuestionSet;

/// Error type for loading a question set.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML question set: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON question set: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported question set format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

/// Parse a question set from TOML text.
pub fn from_toml_str(text: &str) -> Result<QuestionSet, LoadError> {
    Ok(toml::from_str(text)?)
}

/// Parse a question set from JSON text.
pub fn from_json_str(text: &str) -> Result<QuestionSet, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a question set in the given format.
pub fn from_str(text: &str, format: Format) -> Result<QuestionSet, LoadError> {
    match format {
        Format::Toml => from_toml_str(text),
        Format::Json => from_json_str(text),
    }
}

/// Read a question set from a `.toml` or `.json` file.
pub fn from_path(path: impl AsRef<Path>) -> Result<QuestionSet, LoadError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = from_str(&text, format)?;
    tracing::debug!(path = %path.display(), questions = set.len(), "question set loaded");
    Ok(set)
}
