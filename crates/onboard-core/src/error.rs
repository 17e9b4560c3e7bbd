//! # Error Types
//!
//! Parsing errors for the closed vocabularies of this crate. Catalog
//! constraint strings never produce these; they degrade to `None` instead.

use thiserror::Error;

/// Errors raised when text does not name a known unit or fetch type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Text is not `Day`, `Month`, `Year` or `tenure` (plurals and any
    /// casing accepted).
    #[error("unknown duration unit: {0:?}")]
    UnknownDurationUnit(String),

    /// Text is not a one-time or periodic fetch marker.
    #[error("unknown fetch type: {0:?}")]
    UnknownFetchType(String),
}
