//! Toolkit error type.
//!
//! Sub-crates define their own error enums and wrap `RnError` as one variant
//! via `#[from]`, so configuration checks written here surface unchanged.

use thiserror::Error;

/// The base error type for `rn-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum RnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rn-*` crates.
pub type RnResult<T> = Result<T, RnError>;
