//! `rn-osm`: raw OSM entities and the access-graph extractor.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `RawNode`, `RawRoad`, `RawBuilding`, `RawEntityModel`     |
//! | [`config`]    | `ExtractorConfig` and the default tag vocabularies        |
//! | [`visitor`]   | `OsmVisitor` trait, `OsmWay`, `OsmNode`, `WayNode`        |
//! | [`extractor`] | `AccessGraphExtractor` (an `OsmVisitor`)                  |
//! | [`pbf`]       | `PbfSource`, `extract_from_pbf` (feature = `"pbf"` only)  |
//! | [`error`]     | `OsmError`, `OsmResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `pbf`   | Enables PBF reading via the `osmpbf` crate.                  |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod visitor;

#[cfg(feature = "pbf")]
pub mod pbf;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::{OsmError, OsmResult};
pub use extractor::AccessGraphExtractor;
pub use model::{RawBuilding, RawEntityModel, RawNode, RawRoad};
pub use visitor::{OsmNode, OsmVisitor, OsmWay, WayNode};

#[cfg(feature = "pbf")]
pub use pbf::{PbfSource, extract_from_pbf};
