//! In-memory raw entities collected from a map extract.
//!
//! Roads and their node topology are kept in id-ordered maps so every
//! consumer iterates them in the same order on every run.  The model is
//! only ever grown through [`RawEntityModel::add_road`] and
//! [`RawEntityModel::add_building`], which either apply a whole entity or
//! nothing.

use std::collections::{BTreeMap, BTreeSet};

use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId, is_oneway_value};

// ── RawNode ───────────────────────────────────────────────────────────────────

/// A road node with its undirected topology.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNode {
    pub pos:       GeoPoint,
    /// Road ways referencing this node.
    pub ways:      BTreeSet<WayId>,
    /// Nodes directly adjacent along any road.
    pub neighbors: BTreeSet<OsmNodeId>,
    /// Tags merged in by the node enrichment pass.
    pub tags:      TagMap,
}

impl RawNode {
    pub fn new(pos: GeoPoint) -> Self {
        Self {
            pos,
            ways:      BTreeSet::new(),
            neighbors: BTreeSet::new(),
            tags:      TagMap::new(),
        }
    }

    /// `true` if this node becomes a vertex of the access graph: a dead end,
    /// a branch point, or a node shared by more than one way.
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.neighbors.len() != 2 || self.ways.len() > 1
    }
}

// ── RawRoad ───────────────────────────────────────────────────────────────────

/// A parsed road way.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRoad {
    pub way_id:   WayId,
    /// Node ids in way order.
    pub node_ids: Vec<OsmNodeId>,
    /// Primary category (`highway=*`).
    pub highway:  String,
    pub name:     Option<String>,
    /// Raw `oneway=*` value, if tagged.
    pub oneway:   Option<String>,
    /// Tags not consumed by the fields above.
    pub tags:     TagMap,
}

impl RawRoad {
    /// `true` if the way is traversable only in node order.
    pub fn is_oneway(&self) -> bool {
        self.oneway.as_deref().is_some_and(is_oneway_value)
    }
}

// ── RawBuilding ───────────────────────────────────────────────────────────────

/// A building footprint reduced to its centroid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawBuilding {
    pub way_id:   WayId,
    pub centroid: GeoPoint,
    pub name:     Option<String>,
    /// Full tag map of the footprint way.
    pub tags:     TagMap,
}

// ── RawEntityModel ────────────────────────────────────────────────────────────

/// Everything the assembler needs: road nodes, roads and buildings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEntityModel {
    pub nodes:     BTreeMap<OsmNodeId, RawNode>,
    pub roads:     Vec<RawRoad>,
    pub buildings: Vec<RawBuilding>,
}

impl RawEntityModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.roads.is_empty() && self.buildings.is_empty()
    }

    /// Record a road whose nodes are given as `(id, position)` in way order.
    ///
    /// Consecutive pairs become adjacency links; every node gains `way_id` in
    /// its way set.  A node seen before keeps its first position.
    ///
    /// Returns `false` and leaves the model untouched when fewer than two
    /// nodes are supplied.
    pub fn add_road(
        &mut self,
        way_id:  WayId,
        nodes:   &[(OsmNodeId, GeoPoint)],
        highway: impl Into<String>,
        name:    Option<String>,
        oneway:  Option<String>,
        tags:    TagMap,
    ) -> bool {
        if nodes.len() < 2 {
            return false;
        }

        for &(id, pos) in nodes {
            self.nodes
                .entry(id)
                .or_insert_with(|| RawNode::new(pos))
                .ways
                .insert(way_id);
        }

        for pair in nodes.windows(2) {
            let (a, b) = (pair[0].0, pair[1].0);
            if a == b {
                continue;
            }
            if let Some(node) = self.nodes.get_mut(&a) {
                node.neighbors.insert(b);
            }
            if let Some(node) = self.nodes.get_mut(&b) {
                node.neighbors.insert(a);
            }
        }

        self.roads.push(RawRoad {
            way_id,
            node_ids: nodes.iter().map(|&(id, _)| id).collect(),
            highway: highway.into(),
            name,
            oneway,
            tags,
        });
        true
    }

    /// Record a building centroid.
    pub fn add_building(&mut self, building: RawBuilding) {
        self.buildings.push(building);
    }

    /// Merge `tags` into an existing road node.  Unknown ids are ignored.
    ///
    /// Returns `true` if the node exists.
    pub fn enrich_node(&mut self, id: OsmNodeId, tags: impl IntoIterator<Item = (String, String)>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.tags.extend(tags);
                true
            }
            None => false,
        }
    }
}
