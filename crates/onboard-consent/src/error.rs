//! Catalog loading error types.
//!
//! Only structural failures are errors here: a missing file or a document
//! that is not JSON/YAML of the expected shape. Individual constraint
//! strings inside a well-formed catalog never fail; they degrade to "no
//! constraint" at the point of use.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading catalogs and entry documents.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported document format at {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
