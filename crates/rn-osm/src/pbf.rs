//! PBF reader, enabled with the `pbf` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use rn_osm::{ExtractorConfig, extract_from_pbf};
//!
//! let model = extract_from_pbf(Path::new("city.osm.pbf"), ExtractorConfig::default())?;
//! ```
//!
//! # Passes
//!
//! PBF ways carry node ids but no coordinates, so the file is read twice:
//!
//! 1. **Ways**: ways carrying any of the interesting keys (`highway`,
//!    `building` by default) are buffered, and the set of node ids they
//!    reference is recorded.
//! 2. **Nodes**: coordinates are resolved for referenced ids only; tagged
//!    referenced nodes are buffered for enrichment.
//!
//! Buffered ways are then handed to the visitor in file order, followed by
//! the tagged nodes the visitor asks for.
//!
//! # Memory note
//!
//! Only referenced nodes are kept, so memory scales with the road and
//! building network rather than with the whole extract.

use std::path::{Path, PathBuf};

use log::info;
use osmpbf::{Element, ElementReader};
use rustc_hash::{FxHashMap, FxHashSet};

use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId};

use crate::config::ExtractorConfig;
use crate::extractor::AccessGraphExtractor;
use crate::model::RawEntityModel;
use crate::visitor::{OsmNode, OsmVisitor, OsmWay, WayNode};
use crate::{OsmError, OsmResult};

/// Way keys worth buffering for the access-graph extractor.
const WAY_KEYS: &[&str] = &["highway", "building"];

// ── Public entry point ────────────────────────────────────────────────────────

/// Extract a [`RawEntityModel`] from a PBF file with the given vocabularies.
///
/// # Errors
///
/// Returns [`OsmError::Io`] if the file cannot be opened and
/// [`OsmError::Pbf`] on decode errors.
pub fn extract_from_pbf(path: &Path, config: ExtractorConfig) -> OsmResult<RawEntityModel> {
    let source = PbfSource::open(path)?;
    let mut extractor = AccessGraphExtractor::new(config);
    source.visit(&mut extractor)?;
    Ok(extractor.into_model())
}

// ── PbfSource ─────────────────────────────────────────────────────────────────

/// A PBF file that drives an [`OsmVisitor`].
pub struct PbfSource {
    path: PathBuf,
}

struct BufferedWay {
    id:   i64,
    tags: TagMap,
    refs: Vec<i64>,
}

impl PbfSource {
    /// Open `path`.  Fails early if the file is missing or unreadable.
    pub fn open(path: &Path) -> OsmResult<Self> {
        std::fs::File::open(path)?;
        Ok(Self { path: path.to_path_buf() })
    }

    /// Stream the file into `visitor`.
    pub fn visit<V: OsmVisitor>(&self, visitor: &mut V) -> OsmResult<()> {
        // ── Pass 1: buffer candidate ways, note referenced node ids ──────────
        let mut ways: Vec<BufferedWay> = Vec::new();
        let mut referenced: FxHashSet<i64> = FxHashSet::default();

        self.reader()?
            .for_each(|elem| {
                if let Element::Way(w) = elem {
                    let interesting = w.tags().any(|(k, _)| WAY_KEYS.contains(&k));
                    if !interesting {
                        return;
                    }
                    let refs: Vec<i64> = w.refs().collect();
                    referenced.extend(refs.iter().copied());
                    ways.push(BufferedWay {
                        id: w.id(),
                        tags: w.tags().map(|(k, v)| (k.to_owned(), v.to_owned())).collect(),
                        refs,
                    });
                }
            })
            .map_err(|e| OsmError::Pbf(e.to_string()))?;

        // ── Pass 2: resolve referenced node locations and tags ───────────────
        let mut locations: FxHashMap<i64, GeoPoint> =
            FxHashMap::with_capacity_and_hasher(referenced.len(), Default::default());
        let mut tagged: Vec<(i64, TagMap)> = Vec::new();

        self.reader()?
            .for_each(|elem| match elem {
                Element::Node(n) if referenced.contains(&n.id()) => {
                    locations.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
                    let tags: TagMap = n.tags().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
                    if !tags.is_empty() {
                        tagged.push((n.id(), tags));
                    }
                }
                Element::DenseNode(n) if referenced.contains(&n.id()) => {
                    locations.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
                    let tags: TagMap = n.tags().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
                    if !tags.is_empty() {
                        tagged.push((n.id(), tags));
                    }
                }
                _ => {}
            })
            .map_err(|e| OsmError::Pbf(e.to_string()))?;

        info!(
            "read {} candidate ways referencing {} nodes ({} located) from {}",
            ways.len(),
            referenced.len(),
            locations.len(),
            self.path.display(),
        );
        drop(referenced);

        // ── Dispatch ──────────────────────────────────────────────────────────
        for way in ways {
            let nodes = way
                .refs
                .iter()
                .map(|&id| WayNode::new(OsmNodeId(id), locations.get(&id).copied()))
                .collect();
            visitor.on_way(&OsmWay { id: WayId(way.id), tags: way.tags, nodes });
        }

        for (id, tags) in tagged {
            let id = OsmNodeId(id);
            if visitor.wants_node(id) {
                visitor.on_node(&OsmNode { id, tags });
            }
        }

        Ok(())
    }

    fn reader(&self) -> OsmResult<ElementReader<std::io::BufReader<std::fs::File>>> {
        ElementReader::from_path(&self.path).map_err(|e| OsmError::Pbf(e.to_string()))
    }
}
