//! Access-graph error type.

use thiserror::Error;

use rn_core::RnError;
use rn_osm::OsmError;

/// Errors produced by `rn-access`.
///
/// Only caller misuse and I/O surface here; bad map records are skipped
/// during assembly and never become errors.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error(transparent)]
    Core(#[from] RnError),

    #[error(transparent)]
    Osm(#[from] OsmError),
}

pub type AccessResult<T> = Result<T, AccessError>;
