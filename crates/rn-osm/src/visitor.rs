//! Entity visitor interface between a map reader and its consumers.
//!
//! A reader (see [`PbfSource`](crate::pbf::PbfSource) with the `pbf`
//! feature) owns the file format and calls back into an [`OsmVisitor`]
//! once per entity.  Consumers hold their accumulation state in the
//! implementing struct; they never depend on the reader's types.
//!
//! ```text
//! reader ──on_way(&OsmWay)──▶ visitor
//!        ──on_node(&OsmNode)─▶ visitor   (optional enrichment pass)
//! ```

use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId};

/// One node reference of a way, with its location if the reader resolved it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WayNode {
    pub id:  OsmNodeId,
    /// `None` when the referenced node is missing from the extract.
    pub pos: Option<GeoPoint>,
}

impl WayNode {
    pub fn new(id: OsmNodeId, pos: Option<GeoPoint>) -> Self {
        Self { id, pos }
    }

    pub fn located(id: i64, lat: f64, lon: f64) -> Self {
        Self { id: OsmNodeId(id), pos: Some(GeoPoint::new(lat, lon)) }
    }
}

/// A way as delivered to [`OsmVisitor::on_way`].
#[derive(Clone, Debug, PartialEq)]
pub struct OsmWay {
    pub id:    WayId,
    pub tags:  TagMap,
    /// Node references in way order.
    pub nodes: Vec<WayNode>,
}

impl OsmWay {
    #[inline]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// A tagged node as delivered to [`OsmVisitor::on_node`].
#[derive(Clone, Debug, PartialEq)]
pub struct OsmNode {
    pub id:   OsmNodeId,
    pub tags: TagMap,
}

/// Callbacks invoked by a map reader.
pub trait OsmVisitor {
    /// Called once per way, with node locations resolved where possible.
    fn on_way(&mut self, way: &OsmWay);

    /// Called once per tagged node during the enrichment pass.
    fn on_node(&mut self, _node: &OsmNode) {}

    /// `true` if [`on_node`](Self::on_node) wants this node.  Lets a reader
    /// skip allocating tag maps for nodes nobody asked about.
    fn wants_node(&self, _id: OsmNodeId) -> bool {
        false
    }
}
