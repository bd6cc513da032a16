//! `rn-core`: foundational types for the `roadnet` access-graph toolkit.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `OsmNodeId`, `WayId`, `PointId`                         |
//! | [`geo`]       | `GeoPoint`, haversine distance, `polygon_centroid`      |
//! | [`projector`] | `GeoProjector` (equirectangular tangent plane)          |
//! | [`tags`]      | `TagMap`, one-way value parsing                         |
//! | [`rng`]       | `SampleRng` (seeded pivot sampling)                     |
//! | [`error`]     | `RnError`, `RnResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod projector;
pub mod rng;
pub mod tags;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RnError, RnResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, polygon_centroid};
pub use ids::{OsmNodeId, PointId, WayId};
pub use projector::GeoProjector;
pub use rng::SampleRng;
pub use tags::{TagMap, is_oneway_value};
