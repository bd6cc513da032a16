//! `rn-access`: access-graph assembly.
//!
//! Consumes the [`RawEntityModel`](rn_osm::RawEntityModel) produced by
//! `rn-osm` and emits the normalised node/edge payloads of the access graph:
//! intersections, snapped buildings, directed road arcs and building links.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`assembler`] | `AccessGraphAssembler`, `AccessGraph`, `assemble`         |
//! | [`locator`]   | `NodeLocator` (index → grid → scan nearest-node lookup)   |
//! | [`payload`]   | `AccessKey`, `AccessNode`, `AccessEdge` and their enums   |
//! | [`config`]    | `AssemblerConfig`                                         |
//! | [`pipeline`]  | `build_access_graph` (feature = `"pbf"` only)             |
//! | [`error`]     | `AccessError`, `AccessResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `pbf`   | Enables `build_access_graph` over a PBF file.                |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod assembler;
pub mod config;
pub mod error;
pub mod locator;
pub mod payload;

#[cfg(feature = "pbf")]
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use assembler::{AccessGraph, AccessGraphAssembler, assemble};
pub use config::{AssemblerConfig, DEFAULT_SNAP_DISTANCE_M};
pub use error::{AccessError, AccessResult};
pub use locator::{NearestNode, NodeLocator};
pub use payload::{AccessEdge, AccessKey, AccessNode, BUILDING_LINK, NodeType, SourceType};

#[cfg(feature = "pbf")]
pub use pipeline::build_access_graph;
