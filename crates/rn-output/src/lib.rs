//! `rn-output`: file writers for roadnet results.
//!
//! | Writer             | Trait               | Files created                          |
//! |--------------------|---------------------|----------------------------------------|
//! | `CsvAccessWriter`  | `AccessGraphWriter` | `access_nodes.csv`, `access_edges.csv` |
//! | `CsvMetricsWriter` | `MetricsWriter`     | `metrics.csv`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_output::{AccessGraphWriter, CsvAccessWriter};
//!
//! let mut writer = CsvAccessWriter::new(Path::new("./output"))?;
//! writer.write_graph(&graph)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;


pub use csv::{CsvAccessWriter, CsvMetricsWriter};
pub use error::{OutputError, OutputResult};
pub use writer::{AccessGraphWriter, MetricsWriter};
