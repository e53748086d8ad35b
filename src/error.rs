//! Error types for jsonstore
//!
//! Two kinds reach callers: a key with no file (`NotExist`) and everything
//! else that went wrong underneath (`Internal`). Errors produced by caller
//! callbacks never pass through this type unless the caller chose it.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    /// The canonical key has no file on disk
    #[error("entry does not exist: {0}")]
    NotExist(String),

    // -------------------------------------------------------------------------
    // Internal Errors
    // -------------------------------------------------------------------------
    /// Unexpected I/O or decode failure
    #[error("internal error: failed to {op}: {source}")]
    Internal {
        /// Which store operation failed ("get", "put", "range", ...)
        op: &'static str,
        #[source]
        source: Cause,
    },
}

/// Underlying cause of an internal failure
#[derive(Debug, Error)]
pub enum Cause {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cause {
    /// True when the cause is a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            Cause::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Cause::Json(_) => false,
        }
    }
}

impl StoreError {
    pub(crate) fn internal(op: &'static str, source: impl Into<Cause>) -> Self {
        StoreError::Internal {
            op,
            source: source.into(),
        }
    }

    pub fn is_not_exist(&self) -> bool {
        matches!(self, StoreError::NotExist(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, StoreError::Internal { .. })
    }
}
