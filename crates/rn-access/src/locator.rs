//! Nearest road node lookup for building snapping.
//!
//! Three tiers, tried in order:
//!
//! | Tier      | Precondition                         | Cost per query          |
//! |-----------|--------------------------------------|-------------------------|
//! | Index     | projector built, at least one node   | R-tree descent          |
//! | Grid      | query cell or a neighbour populated  | 3×3 bucket scan         |
//! | Scan      | at least one node                    | every node              |
//!
//! The index works on projected metres and only picks the candidate; the
//! reported distance is always the haversine distance to the candidate's
//! real position.  The grid is keyed on raw degrees (0.001° cells) and is
//! built lazily, the first time the index cannot answer.

use std::cell::OnceCell;

use log::warn;
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use rn_core::{GeoPoint, GeoProjector, OsmNodeId};

/// Grid cell size in degrees (≈ 111 m of latitude).
pub const GRID_CELL_DEG: f64 = 0.001;

/// Result of a nearest-node query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestNode {
    pub id:         OsmNodeId,
    /// Haversine distance from the query point, in metres.
    pub distance_m: f64,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Projected `[x, y]` position plus the slot of the node in the locator.
#[derive(Clone)]
struct ProjectedNode {
    xy:   [f64; 2],
    slot: usize,
}

impl RTreeObject for ProjectedNode {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.xy)
    }
}

impl PointDistance for ProjectedNode {
    /// Squared Euclidean distance in projected metres.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.xy[0] - point[0];
        let dy = self.xy[1] - point[1];
        dx * dx + dy * dy
    }
}

struct ProjectedIndex {
    projector: GeoProjector,
    tree:      RTree<ProjectedNode>,
}

type GridKey = (i64, i64);

/// Cell of `p`.  Out-of-range coordinates saturate onto the edge cells.
fn grid_key(p: GeoPoint) -> GridKey {
    ((p.lat / GRID_CELL_DEG).floor() as i64, (p.lon / GRID_CELL_DEG).floor() as i64)
}

// ── NodeLocator ───────────────────────────────────────────────────────────────

/// Read-only nearest-node structure over a fixed set of road nodes.
pub struct NodeLocator {
    ids:       Vec<OsmNodeId>,
    positions: Vec<GeoPoint>,
    index:     Option<ProjectedIndex>,
    grid:      OnceCell<FxHashMap<GridKey, Vec<usize>>>,
}

impl NodeLocator {
    /// Build the locator, including the projected index when possible.
    ///
    /// Nodes are kept in the order given; ties between equidistant nodes go
    /// to the earlier one.
    pub fn new(nodes: impl IntoIterator<Item = (OsmNodeId, GeoPoint)>) -> Self {
        let mut locator = Self::without_index(nodes);
        locator.index = locator.build_index();
        if locator.index.is_none() && !locator.ids.is_empty() {
            warn!(
                "projected index unavailable for {} road nodes, using grid lookup",
                locator.ids.len()
            );
        }
        locator
    }

    /// Build the locator without the projected index, so every query goes
    /// through the grid and scan tiers.
    pub fn without_index(nodes: impl IntoIterator<Item = (OsmNodeId, GeoPoint)>) -> Self {
        let (ids, positions): (Vec<OsmNodeId>, Vec<GeoPoint>) = nodes.into_iter().unzip();
        Self { ids, positions, index: None, grid: OnceCell::new() }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Nearest node to `pos`, trying the index, then the grid, then a scan.
    ///
    /// Returns `None` only when there are no nodes or `pos` is not finite.
    pub fn nearest(&self, pos: GeoPoint) -> Option<NearestNode> {
        if !pos.is_finite() {
            return None;
        }
        self.nearest_by_index(pos)
            .or_else(|| self.nearest_by_grid(pos))
            .or_else(|| self.nearest_by_scan(pos))
    }

    /// Index tier.  `None` if the index was not built or produced a
    /// non-finite distance.
    pub fn nearest_by_index(&self, pos: GeoPoint) -> Option<NearestNode> {
        let index = self.index.as_ref()?;
        let query = index.projector.project(pos);
        if !(query[0].is_finite() && query[1].is_finite()) {
            return None;
        }
        let hit = index.tree.nearest_neighbor(&query)?;
        if !hit.distance_2(&query).is_finite() {
            return None;
        }
        self.exact(pos, hit.slot)
    }

    /// Grid tier.  `None` if the query cell and its eight neighbours are
    /// all empty.
    pub fn nearest_by_grid(&self, pos: GeoPoint) -> Option<NearestNode> {
        let grid = self.grid.get_or_init(|| self.build_grid());
        let (row, col) = grid_key(pos);
        let candidates = (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (row.saturating_add(dr), col.saturating_add(dc))))
            .filter_map(|key| grid.get(&key))
            .flatten()
            .copied();
        self.closest_of(pos, candidates)
    }

    /// Scan tier.  `None` only when there are no nodes.
    pub fn nearest_by_scan(&self, pos: GeoPoint) -> Option<NearestNode> {
        self.closest_of(pos, 0..self.ids.len())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn build_index(&self) -> Option<ProjectedIndex> {
        if self.positions.is_empty() {
            return None;
        }
        let projector = GeoProjector::from_points(self.positions.iter().copied())?;
        let entries: Vec<ProjectedNode> = self
            .positions
            .iter()
            .enumerate()
            .map(|(slot, &p)| ProjectedNode { xy: projector.project(p), slot })
            .collect();
        if entries.iter().any(|e| !(e.xy[0].is_finite() && e.xy[1].is_finite())) {
            return None;
        }
        Some(ProjectedIndex { projector, tree: RTree::bulk_load(entries) })
    }

    fn build_grid(&self) -> FxHashMap<GridKey, Vec<usize>> {
        let mut grid: FxHashMap<GridKey, Vec<usize>> = FxHashMap::default();
        for (slot, &p) in self.positions.iter().enumerate() {
            grid.entry(grid_key(p)).or_default().push(slot);
        }
        grid
    }

    fn exact(&self, pos: GeoPoint, slot: usize) -> Option<NearestNode> {
        let distance_m = pos.distance_m(*self.positions.get(slot)?);
        distance_m
            .is_finite()
            .then(|| NearestNode { id: self.ids[slot], distance_m })
    }

    fn closest_of(&self, pos: GeoPoint, slots: impl Iterator<Item = usize>) -> Option<NearestNode> {
        let mut best: Option<NearestNode> = None;
        for slot in slots {
            let Some(candidate) = self.exact(pos, slot) else {
                continue;
            };
            if best.is_none_or(|b| candidate.distance_m < b.distance_m) {
                best = Some(candidate);
            }
        }
        best
    }
}
