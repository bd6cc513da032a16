//! extract_access_graph: build the access graph of a PBF extract.
//!
//! ```text
//! extract_access_graph <city.osm.pbf> [out_dir]
//! ```
//!
//! Writes `access_nodes.csv` and `access_edges.csv` to `out_dir` (default:
//! the current directory) using the default vocabularies and an 80 m snap
//! distance.

mod common;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use rn_access::{AssemblerConfig, build_access_graph};
use rn_osm::ExtractorConfig;
use rn_output::{AccessGraphWriter, CsvAccessWriter};

fn main() -> Result<()> {
    common::init_logging();

    let mut args = std::env::args().skip(1);
    let Some(pbf) = args.next().map(PathBuf::from) else {
        bail!("usage: extract_access_graph <city.osm.pbf> [out_dir]");
    };
    let out_dir = common::output_dir(args.next())?;

    let t0 = Instant::now();
    let graph = build_access_graph(&pbf, ExtractorConfig::default(), AssemblerConfig::default())
        .with_context(|| format!("building access graph from {}", pbf.display()))?;
    info!(
        "{} nodes, {} edges in {:.2}s",
        graph.nodes.len(),
        graph.edges.len(),
        t0.elapsed().as_secs_f64()
    );

    let mut writer = CsvAccessWriter::new(&out_dir)?;
    writer.write_graph(&graph)?;
    writer.finish()?;
    info!("wrote access graph to {}", out_dir.display());
    Ok(())
}
