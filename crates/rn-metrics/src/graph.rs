//! Directed multigraph over polygon-filtered points.
//!
//! Vertex indices follow first appearance: points in input order, then any
//! edge endpoint missing from the point list.  Two-way edges contribute an
//! arc in each direction, so a two-way street between `a` and `b` counts
//! twice toward the degree of both.  A self-loop is a single arc whether or
//! not its way is one-way.

use std::collections::HashSet;
use std::hash::BuildHasher;

use log::debug;
use petgraph::Direction::{Incoming, Outgoing};
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use rn_core::{PointId, WayId};

use crate::input::{Edge, Point};

/// Arc-labelled directed multigraph keyed by [`PointId`].
pub struct MetricGraph {
    graph: DiGraph<PointId, WayId>,
    index: FxHashMap<PointId, NodeIndex>,
}

impl MetricGraph {
    /// Build the graph.  Every point becomes a vertex, isolated or not;
    /// duplicate point ids collapse onto their first occurrence.
    pub fn build<S: BuildHasher>(points: &[Point], edges: &[Edge], oneway: &HashSet<WayId, S>) -> Self {
        let arcs = edges.len() * 2;
        let mut g = Self {
            graph: DiGraph::with_capacity(points.len(), arcs),
            index: FxHashMap::with_capacity_and_hasher(points.len(), Default::default()),
        };
        for point in points {
            g.vertex(point.id);
        }
        let known = g.graph.node_count();

        for edge in edges {
            let a = g.vertex(edge.source);
            let b = g.vertex(edge.target);
            g.graph.add_edge(a, b, edge.way_id);
            if a != b && !oneway.contains(&edge.way_id) {
                g.graph.add_edge(b, a, edge.way_id);
            }
        }

        if g.graph.node_count() > known {
            debug!(
                "{} edge endpoints were not among the {} points and were added as vertices",
                g.graph.node_count() - known,
                known
            );
        }
        g
    }

    fn vertex(&mut self, id: PointId) -> NodeIndex {
        let graph = &mut self.graph;
        *self.index.entry(id).or_insert_with(|| graph.add_node(id))
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.graph.node_indices().map(|ix| self.graph[ix])
    }

    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.index.get(&id).map(|ix| ix.index())
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.graph.edges_directed(NodeIndex::new(v), Incoming).count()
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.graph.edges_directed(NodeIndex::new(v), Outgoing).count()
    }

    /// Total incident arcs; a self-loop counts once in each direction.
    pub fn degree(&self, v: usize) -> usize {
        self.in_degree(v) + self.out_degree(v)
    }

    /// Distinct successors of every vertex, ascending.  Parallel arcs
    /// collapse to one entry.
    pub fn successor_lists(&self) -> Vec<Vec<usize>> {
        self.graph
            .node_indices()
            .map(|ix| {
                let mut succ: Vec<usize> = self
                    .graph
                    .neighbors_directed(ix, Outgoing)
                    .map(|n| n.index())
                    .collect();
                succ.sort_unstable();
                succ.dedup();
                succ
            })
            .collect()
    }
}
