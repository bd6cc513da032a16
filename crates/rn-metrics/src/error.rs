//! Metrics error type.

use thiserror::Error;

use rn_core::RnError;

/// Errors produced by `rn-metrics`.
///
/// Numerical trouble inside a centrality computation is not an error; the
/// affected metric degrades to zeros instead.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Core(#[from] RnError),

    #[error("metrics input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
