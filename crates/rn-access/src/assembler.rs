//! Access-graph assembly from a completed [`RawEntityModel`].
//!
//! # Stages
//!
//! 1. **Intersections**: road nodes with degree ≠ 2 or on more than one way.
//! 2. **Snapping**: each building centroid is linked to its nearest road
//!    node if that node is within the snap distance.  Snap targets join the
//!    intersection set so roads are split where a building attaches.
//! 3. **Nodes**: intersections in id order, then each snapped building once.
//! 4. **Road edges**: each road is cut at its intersections; every cut
//!    with positive length yields a forward arc, plus a reverse arc unless
//!    the road is one-way.
//! 5. **Building edges**: two arcs per snap, building→node and node→building.
//!
//! Output order depends only on the model, so repeated runs are identical.

use std::collections::BTreeSet;

use log::{debug, info};
use rustc_hash::FxHashSet;

use rn_core::{GeoPoint, OsmNodeId, WayId};
use rn_osm::{RawBuilding, RawEntityModel, RawRoad};

use crate::config::AssemblerConfig;
use crate::error::AccessResult;
use crate::locator::NodeLocator;
use crate::payload::{AccessEdge, AccessKey, AccessNode, BUILDING_LINK, NodeType, SourceType};

// ── AccessGraph ───────────────────────────────────────────────────────────────

/// Assembled access graph: node payloads and directed edge payloads.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessGraph {
    pub nodes: Vec<AccessNode>,
    pub edges: Vec<AccessEdge>,
}

impl AccessGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Keys of every emitted node.
    pub fn node_keys(&self) -> FxHashSet<AccessKey> {
        self.nodes.iter().map(|n| n.key).collect()
    }

    /// Number of building connector arcs.
    pub fn building_link_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_building_link).count()
    }
}

/// A building accepted by the snapping stage.
struct BuildingLink<'m> {
    building:   &'m RawBuilding,
    node:       OsmNodeId,
    distance_m: f64,
}

// ── AccessGraphAssembler ──────────────────────────────────────────────────────

/// Turns a [`RawEntityModel`] into an [`AccessGraph`].
pub struct AccessGraphAssembler<'m> {
    model:   &'m RawEntityModel,
    config:  AssemblerConfig,
    locator: NodeLocator,
}

impl<'m> AccessGraphAssembler<'m> {
    /// Prepare an assembler; the nearest-node index is built here, once.
    ///
    /// # Errors
    ///
    /// Rejects an invalid [`AssemblerConfig`] before any work is done.
    pub fn new(model: &'m RawEntityModel, config: AssemblerConfig) -> AccessResult<Self> {
        config.validate()?;
        let locator = NodeLocator::new(model.nodes.iter().map(|(&id, node)| (id, node.pos)));
        Ok(Self { model, config, locator })
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Run every stage and return the graph.
    pub fn build(&self) -> AccessGraph {
        if self.model.nodes.is_empty() {
            info!("no road nodes, access graph is empty");
            return AccessGraph::default();
        }

        let mut intersections: BTreeSet<OsmNodeId> = self
            .model
            .nodes
            .iter()
            .filter(|(_, node)| node.is_intersection())
            .map(|(&id, _)| id)
            .collect();
        let topological = intersections.len();

        let links = self.snap_buildings();
        intersections.extend(links.iter().map(|link| link.node));

        let mut nodes = self.intersection_nodes(&intersections);
        let building_nodes = self.building_nodes(&links);
        let building_node_count = building_nodes.len();
        nodes.extend(building_nodes);

        let mut edges = self.road_edges(&intersections);
        let road_edge_count = edges.len();
        edges.extend(self.building_edges(&links));

        info!(
            "assembled {} intersections ({} from snapping), {} of {} buildings snapped, \
             {} road arcs, {} building arcs",
            intersections.len(),
            intersections.len() - topological,
            building_node_count,
            self.model.buildings.len(),
            road_edge_count,
            edges.len() - road_edge_count,
        );

        AccessGraph { nodes, edges }
    }

    // ── Stages ────────────────────────────────────────────────────────────

    fn snap_buildings(&self) -> Vec<BuildingLink<'m>> {
        let mut links = Vec::new();
        for building in &self.model.buildings {
            let Some(nearest) = self.locator.nearest(building.centroid) else {
                debug!("building {} has no nearest road node", building.way_id);
                continue;
            };
            if nearest.distance_m > self.config.snap_distance_m {
                debug!(
                    "building {} is {:.1} m from node {}, beyond snap distance",
                    building.way_id, nearest.distance_m, nearest.id
                );
                continue;
            }
            links.push(BuildingLink { building, node: nearest.id, distance_m: nearest.distance_m });
        }
        links
    }

    fn intersection_nodes(&self, intersections: &BTreeSet<OsmNodeId>) -> Vec<AccessNode> {
        intersections
            .iter()
            .filter_map(|&id| {
                let node = self.model.nodes.get(&id)?;
                Some(AccessNode {
                    key:         AccessKey::Node(id),
                    source_type: SourceType::Node,
                    source_id:   id.get(),
                    node_type:   NodeType::Intersection,
                    pos:         node.pos,
                    name:        None,
                    tags:        (!node.tags.is_empty()).then(|| node.tags.clone()),
                })
            })
            .collect()
    }

    fn building_nodes(&self, links: &[BuildingLink<'_>]) -> Vec<AccessNode> {
        let mut seen: FxHashSet<WayId> = FxHashSet::default();
        links
            .iter()
            .filter(|link| seen.insert(link.building.way_id))
            .map(|link| {
                let b = link.building;
                AccessNode {
                    key:         AccessKey::Building(b.way_id),
                    source_type: SourceType::Building,
                    source_id:   b.way_id.get(),
                    node_type:   NodeType::Building,
                    pos:         b.centroid,
                    name:        b.name.clone(),
                    tags:        Some(b.tags.clone()),
                }
            })
            .collect()
    }

    fn road_edges(&self, intersections: &BTreeSet<OsmNodeId>) -> Vec<AccessEdge> {
        let mut edges = Vec::new();
        for road in &self.model.roads {
            self.segment_road(road, intersections, &mut edges);
        }
        edges
    }

    /// Cut `road` at its intersections and append the resulting arcs.
    fn segment_road(&self, road: &RawRoad, intersections: &BTreeSet<OsmNodeId>, out: &mut Vec<AccessEdge>) {
        let mut start: Option<OsmNodeId> = None;
        let mut path: Vec<GeoPoint> = Vec::new();

        for &id in &road.node_ids {
            let Some(node) = self.model.nodes.get(&id) else {
                debug!("road {} references unknown node {}, skipped", road.way_id, id);
                continue;
            };
            path.push(node.pos);
            if !intersections.contains(&id) {
                continue;
            }

            match start {
                Some(from) if from != id => {
                    let length_m = path_length(&path);
                    if length_m > 0.0 {
                        let forward = AccessEdge {
                            source:           AccessKey::Node(from),
                            target:           AccessKey::Node(id),
                            way_id:           Some(road.way_id),
                            road_type:        road.highway.clone(),
                            length_m,
                            is_building_link: false,
                            name:             road.name.clone(),
                        };
                        if road.is_oneway() {
                            out.push(forward);
                        } else {
                            let reverse = forward.reversed();
                            out.push(forward);
                            out.push(reverse);
                        }
                    } else {
                        debug!("road {} has a zero-length cut at node {}, skipped", road.way_id, id);
                    }
                }
                // First intersection, or a loop back onto the open start.
                _ => {}
            }
            start = Some(id);
            path.clear();
            path.push(node.pos);
        }
    }

    fn building_edges(&self, links: &[BuildingLink<'_>]) -> Vec<AccessEdge> {
        let mut edges = Vec::with_capacity(links.len() * 2);
        for link in links {
            let inbound = AccessEdge {
                source:           AccessKey::Building(link.building.way_id),
                target:           AccessKey::Node(link.node),
                way_id:           None,
                road_type:        BUILDING_LINK.to_owned(),
                length_m:         link.distance_m,
                is_building_link: true,
                name:             link.building.name.clone(),
            };
            let outbound = inbound.reversed();
            edges.push(inbound);
            edges.push(outbound);
        }
        edges
    }
}

/// Summed haversine length of consecutive pairs in `path`.
fn path_length(path: &[GeoPoint]) -> f64 {
    path.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}

/// Assemble `model` with `config` in one call.
///
/// # Errors
///
/// Rejects an invalid [`AssemblerConfig`].
pub fn assemble(model: &RawEntityModel, config: AssemblerConfig) -> AccessResult<AccessGraph> {
    Ok(AccessGraphAssembler::new(model, config)?.build())
}
