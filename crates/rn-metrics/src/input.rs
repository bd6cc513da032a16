//! Input and output records of the centrality engine.

use rn_core::{PointId, WayId};

/// A vertex of the polygon-filtered base graph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub id:  PointId,
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(id: i64, lon: f64, lat: f64) -> Self {
        Self { id: PointId(id), lon, lat }
    }
}

/// A base-graph edge.  Traversable both ways unless its way is one-way.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub id:     i64,
    pub way_id: WayId,
    pub source: PointId,
    pub target: PointId,
    pub name:   Option<String>,
}

impl Edge {
    pub fn new(id: i64, way_id: i64, source: i64, target: i64, name: Option<&str>) -> Self {
        Self {
            id,
            way_id: WayId(way_id),
            source: PointId(source),
            target: PointId(target),
            name: name.map(str::to_owned),
        }
    }
}

/// Per-vertex metrics, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRow {
    pub id:          PointId,
    /// Incident arcs, both directions, parallel arcs included.
    pub degree:      usize,
    pub in_degree:   f64,
    pub out_degree:  f64,
    pub eigenvector: f64,
    pub betweenness: f64,
    /// Marker radius in `[1, 11]`.
    pub radius:      f64,
    /// `"rgb(r, g, b)"` on a blue-to-red ramp.
    pub color:       String,
}
