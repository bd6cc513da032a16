//! OSM-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-osm`.
///
/// Bad individual entities never surface here; they are skipped during
/// extraction.  These variants cover unreadable input and caller misuse.
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "pbf")]
    #[error("PBF read error: {0}")]
    Pbf(String),
}

pub type OsmResult<T> = Result<T, OsmError>;
