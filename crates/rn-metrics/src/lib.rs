//! `rn-metrics`: topological centrality for polygon-filtered road graphs.
//!
//! The engine builds a directed multigraph from points and edges (two arcs
//! per two-way edge), computes degree, in/out-degree, eigenvector and
//! sampled betweenness centrality, and derives a radius and colour from
//! betweenness for map rendering.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`engine`]     | `CentralityEngine`                                      |
//! | [`graph`]      | `MetricGraph` (petgraph `DiGraph` keyed by `PointId`)   |
//! | [`centrality`] | degree, eigenvector and Brandes betweenness functions   |
//! | [`style`]      | `NodeStyle`, `style_column`                             |
//! | [`input`]      | `Point`, `Edge`, `MetricRow`                            |
//! | [`loader`]     | CSV loaders for points, edges and one-way way ids       |
//! | [`config`]     | `MetricsConfig`                                         |
//! | [`error`]      | `MetricsError`, `MetricsResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Betweenness pivots run on Rayon's pool.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.       |

pub mod centrality;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod input;
pub mod loader;
pub mod style;


pub use config::MetricsConfig;
pub use engine::CentralityEngine;
pub use error::{MetricsError, MetricsResult};
pub use graph::MetricGraph;
pub use input::{Edge, MetricRow, Point};
pub use loader::{
    load_edges_csv, load_edges_reader, load_oneway_csv, load_oneway_reader, load_points_csv,
    load_points_reader,
};
pub use style::{NodeStyle, style_column};
