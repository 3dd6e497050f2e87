//! Core error type.
//!
//! Sub-crates define their own error enums; the `gn-nav` facade folds them
//! into a single `NavError` for callers.

use thiserror::Error;

/// Errors produced by `gn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown gravity tag {0:?}: expected \"down\", \"up\", \"left\", or \"right\"")]
    UnknownGravity(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
