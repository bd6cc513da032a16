//! Output records of the assembler.
//!
//! Nodes are addressed by an [`AccessKey`] rather than a database id: the
//! persistence layer remaps keys to integer ids on insert.  Keys of road
//! nodes and buildings live in separate namespaces, so an OSM node and a
//! building way sharing a numeric id never collide.

use std::fmt;

use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId};

/// Road-type label carried by building connector edges.
pub const BUILDING_LINK: &str = "building_link";

// ── AccessKey ─────────────────────────────────────────────────────────────────

/// Synthetic node key, rendered as `node:<id>` or `building:<id>`.
///
/// Ordering sorts every road node before every building, each by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessKey {
    Node(OsmNodeId),
    Building(WayId),
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKey::Node(id) => write!(f, "node:{id}"),
            AccessKey::Building(id) => write!(f, "building:{id}"),
        }
    }
}

// ── Enumerations ──────────────────────────────────────────────────────────────

/// Which OSM entity an [`AccessNode`] was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceType {
    Node,
    Building,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Node => "node",
            SourceType::Building => "building",
        }
    }
}

/// Role of an [`AccessNode`] in the access graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    Intersection,
    Building,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Intersection => "intersection",
            NodeType::Building => "building",
        }
    }
}

// ── AccessNode ────────────────────────────────────────────────────────────────

/// One vertex of the access graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessNode {
    pub key:         AccessKey,
    pub source_type: SourceType,
    /// OSM node id or building way id, depending on `source_type`.
    pub source_id:   i64,
    pub node_type:   NodeType,
    pub pos:         GeoPoint,
    pub name:        Option<String>,
    pub tags:        Option<TagMap>,
}

// ── AccessEdge ────────────────────────────────────────────────────────────────

/// One directed arc of the access graph.
///
/// Two-way roads appear as two rows with swapped endpoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessEdge {
    pub source:           AccessKey,
    pub target:           AccessKey,
    /// Originating road way; `None` for building links.
    pub way_id:           Option<WayId>,
    /// `highway=*` value, or [`BUILDING_LINK`].
    pub road_type:        String,
    pub length_m:         f64,
    pub is_building_link: bool,
    pub name:             Option<String>,
}

impl AccessEdge {
    /// The same arc in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            ..self.clone()
        }
    }
}
