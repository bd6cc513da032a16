//! Access-graph extractor: filters ways by tag vocabulary and fills a
//! [`RawEntityModel`].
//!
//! Each way is inspected twice, independently:
//!
//! - **Road**: `highway` in the road vocabulary, or `highway=service` with
//!   an accepted `service` sub-type.  Located nodes are kept in way order;
//!   ways left with fewer than two are dropped.
//! - **Building**: `building` in the building vocabulary (or the generic
//!   `yes`).  The footprint's located vertices are reduced to a centroid;
//!   footprints with no located vertex are dropped.
//!
//! A way may be both (rare, but it happens with mis-tagged data).

use log::{debug, info};

use rn_core::{GeoPoint, OsmNodeId, TagMap, polygon_centroid};

use crate::config::ExtractorConfig;
use crate::model::{RawBuilding, RawEntityModel};
use crate::visitor::{OsmNode, OsmVisitor, OsmWay};

/// Tags lifted into fixed [`RawRoad`](crate::RawRoad) fields.
const ROAD_FIELD_TAGS: &[&str] = &["highway", "name", "oneway"];

/// Collects roads, road nodes and buildings from visited ways.
pub struct AccessGraphExtractor {
    config:            ExtractorConfig,
    model:             RawEntityModel,
    skipped_roads:     usize,
    skipped_buildings: usize,
}

impl AccessGraphExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            model: RawEntityModel::new(),
            skipped_roads: 0,
            skipped_buildings: 0,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read-only view of the model built so far.
    pub fn model(&self) -> &RawEntityModel {
        &self.model
    }

    /// Consume the extractor and return the completed model.
    pub fn into_model(self) -> RawEntityModel {
        info!(
            "extracted {} roads over {} nodes and {} buildings ({} roads, {} buildings skipped)",
            self.model.roads.len(),
            self.model.nodes.len(),
            self.model.buildings.len(),
            self.skipped_roads,
            self.skipped_buildings,
        );
        self.model
    }

    fn collect_road(&mut self, way: &OsmWay) {
        let Some(highway) = way.tag("highway") else {
            return;
        };
        if !self.config.accepts_road(highway, way.tag("service")) {
            return;
        }

        let nodes: Vec<(OsmNodeId, GeoPoint)> = way
            .nodes
            .iter()
            .filter_map(|n| n.pos.filter(|p| p.is_finite()).map(|p| (n.id, p)))
            .collect();

        let extra: TagMap = way
            .tags
            .iter()
            .filter(|(k, _)| !ROAD_FIELD_TAGS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let added = self.model.add_road(
            way.id,
            &nodes,
            highway,
            way.tag("name").map(str::to_owned),
            way.tag("oneway").map(str::to_owned),
            extra,
        );
        if !added {
            debug!("road way {} has {} located nodes, skipped", way.id, nodes.len());
            self.skipped_roads += 1;
        }
    }

    fn collect_building(&mut self, way: &OsmWay) {
        let Some(kind) = way.tag("building") else {
            return;
        };
        if kind.is_empty() || !self.config.accepts_building(kind) {
            return;
        }

        let ring: Vec<GeoPoint> = way
            .nodes
            .iter()
            .filter_map(|n| n.pos)
            .filter(|p| p.is_finite())
            .collect();

        let Some(centroid) = polygon_centroid(&ring) else {
            debug!("building way {} has no located vertices, skipped", way.id);
            self.skipped_buildings += 1;
            return;
        };

        let name = way
            .tag("name")
            .filter(|n| !n.is_empty())
            .or_else(|| way.tag("addr:housename").filter(|n| !n.is_empty()))
            .map(str::to_owned);

        self.model.add_building(RawBuilding {
            way_id: way.id,
            centroid,
            name,
            tags: way.tags.clone(),
        });
    }
}

impl Default for AccessGraphExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl OsmVisitor for AccessGraphExtractor {
    fn on_way(&mut self, way: &OsmWay) {
        self.collect_road(way);
        self.collect_building(way);
    }

    fn on_node(&mut self, node: &OsmNode) {
        let kept: Vec<(String, String)> = node
            .tags
            .iter()
            .filter(|(k, _)| self.config.node_tags.contains(k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if kept.is_empty() {
            return;
        }
        self.model.enrich_node(node.id, kept);
    }

    fn wants_node(&self, id: OsmNodeId) -> bool {
        self.model.nodes.contains_key(&id)
    }
}
