//! Writer traits implemented by output backends.

use rn_access::{AccessEdge, AccessGraph, AccessNode};
use rn_metrics::MetricRow;

use crate::OutputResult;

/// Sink for access-graph payloads.
pub trait AccessGraphWriter {
    fn write_nodes(&mut self, nodes: &[AccessNode]) -> OutputResult<()>;

    fn write_edges(&mut self, edges: &[AccessEdge]) -> OutputResult<()>;

    /// Write every node, then every edge.
    fn write_graph(&mut self, graph: &AccessGraph) -> OutputResult<()> {
        self.write_nodes(&graph.nodes)?;
        self.write_edges(&graph.edges)
    }

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after success is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Sink for centrality rows.
pub trait MetricsWriter {
    fn write_rows(&mut self, rows: &[MetricRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it again after success is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
