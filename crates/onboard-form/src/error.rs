//! Form-layer error types.
//!
//! Only structural failures are errors here: documents that cannot be read
//! or parsed, exports that cannot be written, and wizard navigation to
//! steps that do not exist. Incomplete or invalid answers are reported by
//! the review instead.

use std::path::PathBuf;

use thiserror::Error;

use onboard_consent::CatalogError;

/// Errors that can occur in the form layer.
#[derive(Debug, Error)]
pub enum FormError {
    /// A catalog or form document could not be loaded.
    #[error(transparent)]
    Document(#[from] CatalogError),

    /// Writing an export failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the form failed.
    #[error("failed to serialize form: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A wizard was built with no steps.
    #[error("wizard has no steps")]
    NoSteps,

    /// Navigation named a step the wizard does not have.
    #[error("unknown wizard step: {0:?}")]
    UnknownStep(String),

    /// Navigation skipped ahead past steps not yet visited.
    #[error("wizard step {0:?} is not reachable yet")]
    StepNotReachable(String),
}

/// Convenience alias for form-layer results.
pub type FormResult<T> = Result<T, FormError>;
