//! Extractor configuration and the default tag vocabularies.
//!
//! The defaults target the *access* network: residential streets, service
//! roads and driveways, and the building types that plausibly have a
//! doorstep on one of them.  Arterials are deliberately absent; the base
//! routable graph is loaded by a separate pipeline.

use std::collections::BTreeSet;

/// `highway=*` values whose ways become access roads.
pub const ACCESS_HIGHWAY_TYPES: &[&str] = &[
    "service",
    "residential",
    "living_street",
    "unclassified",
    "tertiary",
    "road",
    "track",
];

/// `service=*` values accepted on `highway=service` ways even when
/// `service` itself is not in the highway vocabulary.
pub const ACCESS_SERVICE_VALUES: &[&str] = &[
    "driveway",
    "alley",
    "parking_aisle",
    "emergency_access",
];

/// `building=*` values recorded as standalone buildings.
pub const STANDALONE_BUILDING_TYPES: &[&str] = &[
    "yes",
    "house",
    "detached",
    "residential",
    "apartments",
    "industrial",
    "commercial",
    "warehouse",
    "retail",
    "public",
    "school",
    "hospital",
];

/// Node tag keys merged into road nodes during the enrichment pass.
pub const NODE_ENRICHMENT_TAGS: &[&str] = &[
    "population",
    "traffic_signals",
    "crossing",
    "button_operated",
    "traffic_calming",
    "highway",
    "traffic_sign",
    "admin_level",
    "railway",
    "population:date",
    "name",
    "public_transport",
    "motorcar",
];

/// Tag vocabularies used by [`AccessGraphExtractor`](crate::AccessGraphExtractor).
///
/// Vocabularies are injected rather than read from globals so tests can
/// narrow or widen them freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Accepted `highway=*` values.
    pub road_types:     BTreeSet<String>,
    /// Accepted `service=*` values on `highway=service` ways.
    pub service_types:  BTreeSet<String>,
    /// Accepted `building=*` values.  Empty accepts every value.
    pub building_types: BTreeSet<String>,
    /// Node tag keys kept by the enrichment pass.
    pub node_tags:      BTreeSet<String>,
}

impl ExtractorConfig {
    pub fn new(
        road_types:     impl IntoIterator<Item = impl Into<String>>,
        service_types:  impl IntoIterator<Item = impl Into<String>>,
        building_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            road_types:     collect(road_types),
            service_types:  collect(service_types),
            building_types: collect(building_types),
            node_tags:      collect(NODE_ENRICHMENT_TAGS.iter().copied()),
        }
    }

    /// Replace the node enrichment vocabulary.
    pub fn with_node_tags(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node_tags = collect(keys);
        self
    }

    /// `true` if a way with these `highway`/`service` values is an access road.
    pub fn accepts_road(&self, highway: &str, service: Option<&str>) -> bool {
        if self.road_types.contains(highway) {
            return true;
        }
        highway == "service" && service.is_some_and(|s| self.service_types.contains(s))
    }

    /// `true` if a `building=<value>` way should be recorded.
    ///
    /// The generic `yes` is always accepted.
    pub fn accepts_building(&self, value: &str) -> bool {
        self.building_types.is_empty()
            || value == "yes"
            || self.building_types.contains(value)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(
            ACCESS_HIGHWAY_TYPES.iter().copied(),
            ACCESS_SERVICE_VALUES.iter().copied(),
            STANDALONE_BUILDING_TYPES.iter().copied(),
        )
    }
}

fn collect(values: impl IntoIterator<Item = impl Into<String>>) -> BTreeSet<String> {
    values.into_iter().map(Into::into).collect()
}
