//! One-call pipeline: PBF file → extractor → assembler.

use std::path::Path;

use rn_osm::{ExtractorConfig, extract_from_pbf};

use crate::assembler::{AccessGraph, assemble};
use crate::config::AssemblerConfig;
use crate::error::AccessResult;

/// Extract `path` with `extractor` vocabularies and assemble the result.
///
/// # Errors
///
/// Rejects an invalid `assembler` config before the file is opened, then
/// propagates [`OsmError`](rn_osm::OsmError) from reading the file.  Bad
/// records inside the file are skipped, not reported.
pub fn build_access_graph(
    path:      &Path,
    extractor: ExtractorConfig,
    assembler: AssemblerConfig,
) -> AccessResult<AccessGraph> {
    assembler.validate()?;
    let model = extract_from_pbf(path, extractor)?;
    assemble(&model, assembler)
}
