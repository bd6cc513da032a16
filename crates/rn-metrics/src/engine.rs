//! Centrality engine: points and edges in, one styled metric row per vertex out.

use std::collections::HashSet;
use std::hash::BuildHasher;

use log::{info, warn};

use rn_core::{SampleRng, WayId};

use crate::MetricsResult;
use crate::centrality::{
    betweenness_centrality, eigenvector_centrality, in_degree_centrality, out_degree_centrality,
};
use crate::config::MetricsConfig;
use crate::graph::MetricGraph;
use crate::input::{Edge, MetricRow, Point};
use crate::style::style_column;

/// Computes [`MetricRow`]s for a polygon-filtered point/edge set.
///
/// # Example
///
/// ```
/// use rn_core::WayId;
/// use rn_metrics::{CentralityEngine, Edge, MetricsConfig, Point};
/// use rustc_hash::FxHashSet;
///
/// let engine = CentralityEngine::new(MetricsConfig::default()).unwrap();
/// let points = [Point::new(1, 30.0, 60.0), Point::new(2, 31.0, 61.0)];
/// let edges = [Edge::new(10, 100, 1, 2, Some("Road"))];
/// let rows = engine.compute(&points, &edges, &FxHashSet::<WayId>::default());
/// assert_eq!(rows.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CentralityEngine {
    config: MetricsConfig,
}

impl CentralityEngine {
    /// # Errors
    ///
    /// Rejects an invalid [`MetricsConfig`].
    pub fn new(config: MetricsConfig) -> MetricsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute metrics.  Rows follow vertex order: points as given (first
    /// occurrence of each id), then edge endpoints that were not points.
    ///
    /// An empty point list yields no rows.
    pub fn compute<S: BuildHasher>(
        &self,
        points: &[Point],
        edges:  &[Edge],
        oneway: &HashSet<WayId, S>,
    ) -> Vec<MetricRow> {
        if points.is_empty() {
            return Vec::new();
        }

        let graph = MetricGraph::build(points, edges, oneway);
        let n = graph.vertex_count();

        let in_degree = in_degree_centrality(&graph);
        let out_degree = out_degree_centrality(&graph);

        let eigenvector = eigenvector_centrality(&graph, self.config.eigen_max_iter, self.config.eigen_tolerance)
            .unwrap_or_else(|| {
                warn!(
                    "eigenvector centrality did not converge in {} iterations over {n} vertices, using zeros",
                    self.config.eigen_max_iter
                );
                vec![0.0; n]
            });

        let k = self.config.max_pivots.min(n.max(1));
        let pivots = SampleRng::new(self.config.seed).sample_indices(n, k);
        let betweenness = betweenness_centrality(&graph, &pivots).unwrap_or_else(|| {
            warn!("betweenness centrality produced non-finite values over {n} vertices, using zeros");
            vec![0.0; n]
        });

        let styles = style_column(&betweenness);

        info!(
            "computed metrics for {n} vertices and {} arcs ({k} betweenness pivots)",
            graph.arc_count()
        );

        graph
            .ids()
            .zip(styles)
            .enumerate()
            .map(|(v, (id, style))| MetricRow {
                id,
                degree: graph.degree(v),
                in_degree: in_degree[v],
                out_degree: out_degree[v],
                eigenvector: eigenvector[v],
                betweenness: betweenness[v],
                radius: style.radius,
                color: style.color,
            })
            .collect()
    }
}

impl Default for CentralityEngine {
    fn default() -> Self {
        Self { config: MetricsConfig::default() }
    }
}
