//! CSV output backend.
//!
//! | Writer             | Files created                             |
//! |--------------------|-------------------------------------------|
//! | `CsvAccessWriter`  | `access_nodes.csv`, `access_edges.csv`    |
//! | `CsvMetricsWriter` | `metrics.csv`                             |
//!
//! Optional fields are written as empty strings.  Node tags are flattened
//! to `key=value` pairs joined by `;`, in key order.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rn_access::{AccessEdge, AccessNode};
use rn_core::TagMap;
use rn_metrics::MetricRow;

use crate::OutputResult;
use crate::writer::{AccessGraphWriter, MetricsWriter};

pub const ACCESS_NODES_FILE: &str = "access_nodes.csv";
pub const ACCESS_EDGES_FILE: &str = "access_edges.csv";
pub const METRICS_FILE: &str = "metrics.csv";

pub const ACCESS_NODE_HEADER: [&str; 8] =
    ["key", "source_type", "source_id", "node_type", "longitude", "latitude", "name", "tags"];
pub const ACCESS_EDGE_HEADER: [&str; 7] =
    ["source_key", "target_key", "source_way_id", "road_type", "length_m", "is_building_link", "name"];
pub const METRICS_HEADER: [&str; 8] =
    ["id", "degree", "in_degree", "out_degree", "eigenvector", "betweenness", "radius", "color"];

// ── Access graph ──────────────────────────────────────────────────────────────

/// Writes access-graph payloads to two CSV files.
pub struct CsvAccessWriter {
    nodes:    Writer<File>,
    edges:    Writer<File>,
    finished: bool,
}

impl CsvAccessWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nodes = Writer::from_path(dir.join(ACCESS_NODES_FILE))?;
        nodes.write_record(ACCESS_NODE_HEADER)?;

        let mut edges = Writer::from_path(dir.join(ACCESS_EDGES_FILE))?;
        edges.write_record(ACCESS_EDGE_HEADER)?;

        Ok(Self { nodes, edges, finished: false })
    }
}

impl AccessGraphWriter for CsvAccessWriter {
    fn write_nodes(&mut self, nodes: &[AccessNode]) -> OutputResult<()> {
        for node in nodes {
            self.nodes.write_record(&[
                node.key.to_string(),
                node.source_type.as_str().to_owned(),
                node.source_id.to_string(),
                node.node_type.as_str().to_owned(),
                node.pos.lon.to_string(),
                node.pos.lat.to_string(),
                node.name.clone().unwrap_or_default(),
                node.tags.as_ref().map(flatten_tags).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, edges: &[AccessEdge]) -> OutputResult<()> {
        for edge in edges {
            self.edges.write_record(&[
                edge.source.to_string(),
                edge.target.to_string(),
                edge.way_id.map(|w| w.to_string()).unwrap_or_default(),
                edge.road_type.clone(),
                edge.length_m.to_string(),
                (edge.is_building_link as u8).to_string(),
                edge.name.clone().unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        self.edges.flush()?;
        Ok(())
    }
}

fn flatten_tags(tags: &TagMap) -> String {
    tags.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(";")
}

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Writes centrality rows to `metrics.csv`.
pub struct CsvMetricsWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvMetricsWriter {
    /// Open (or create) `metrics.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(METRICS_FILE))?;
        rows.write_record(METRICS_HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl MetricsWriter for CsvMetricsWriter {
    fn write_rows(&mut self, rows: &[MetricRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.id.to_string(),
                row.degree.to_string(),
                row.in_degree.to_string(),
                row.out_degree.to_string(),
                row.eigenvector.to_string(),
                row.betweenness.to_string(),
                row.radius.to_string(),
                row.color.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
