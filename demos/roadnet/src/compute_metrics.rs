//! compute_metrics: centrality metrics for a polygon-filtered base graph.
//!
//! ```text
//! compute_metrics <points.csv> <edges.csv> [oneway.csv] [out_dir]
//! ```
//!
//! Writes `metrics.csv` to `out_dir` (default: the current directory).
//! Without `oneway.csv` every edge is treated as two-way.

mod common;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use rn_metrics::{CentralityEngine, MetricsConfig, load_edges_csv, load_oneway_csv, load_points_csv};
use rn_output::{CsvMetricsWriter, MetricsWriter};

const USAGE: &str = "usage: compute_metrics <points.csv> <edges.csv> [oneway.csv] [out_dir]";

fn main() -> Result<()> {
    common::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (points_path, edges_path) = match args.as_slice() {
        [points, edges, ..] => (Path::new(points), Path::new(edges)),
        _ => bail!(USAGE),
    };
    if args.len() > 4 {
        bail!(USAGE);
    }

    let points = load_points_csv(points_path)
        .with_context(|| format!("loading {}", points_path.display()))?;
    let edges = load_edges_csv(edges_path)
        .with_context(|| format!("loading {}", edges_path.display()))?;
    let oneway = match args.get(2) {
        Some(path) => load_oneway_csv(Path::new(path)).with_context(|| format!("loading {path}"))?,
        None => Default::default(),
    };
    let out_dir = common::output_dir(args.get(3).cloned())?;
    info!(
        "loaded {} points, {} edges, {} one-way ways",
        points.len(),
        edges.len(),
        oneway.len()
    );

    let engine = CentralityEngine::new(MetricsConfig::default())?;
    let t0 = Instant::now();
    let rows = engine.compute(&points, &edges, &oneway);
    info!("{} metric rows in {:.2}s", rows.len(), t0.elapsed().as_secs_f64());

    let mut writer = CsvMetricsWriter::new(&out_dir)?;
    writer.write_rows(&rows)?;
    writer.finish()?;
    info!("wrote {}", out_dir.join("metrics.csv").display());

    Ok(())
}
