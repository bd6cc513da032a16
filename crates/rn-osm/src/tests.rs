//! Unit tests for rn-osm.
//!
//! The extractor is driven through the visitor interface with synthetic
//! records, so no PBF fixture is needed.

#[cfg(test)]
mod helpers {
    use rn_core::{TagMap, WayId};

    use crate::visitor::{OsmWay, WayNode};

    pub fn tags(pairs: &[(&str, &str)]) -> TagMap {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    pub fn way(id: i64, pairs: &[(&str, &str)], nodes: Vec<WayNode>) -> OsmWay {
        OsmWay { id: WayId(id), tags: tags(pairs), nodes }
    }

    /// Closed square footprint of side `d` degrees anchored at (lat, lon).
    pub fn footprint(first_id: i64, lat: f64, lon: f64, d: f64) -> Vec<WayNode> {
        vec![
            WayNode::located(first_id, lat, lon),
            WayNode::located(first_id + 1, lat, lon + d),
            WayNode::located(first_id + 2, lat + d, lon + d),
            WayNode::located(first_id + 3, lat + d, lon),
            WayNode::located(first_id, lat, lon),
        ]
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId};

    use crate::RawEntityModel;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn add_road_links_consecutive_nodes() {
        let mut m = RawEntityModel::new();
        let added = m.add_road(
            WayId(1),
            &[(OsmNodeId(1), p(60.0, 30.0)), (OsmNodeId(2), p(60.0, 30.001)), (OsmNodeId(3), p(60.0, 30.002))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        assert!(added);
        assert_eq!(m.roads.len(), 1);
        assert_eq!(m.nodes[&OsmNodeId(2)].neighbors.len(), 2);
        assert_eq!(m.nodes[&OsmNodeId(1)].neighbors.len(), 1);
        assert!(m.nodes[&OsmNodeId(3)].ways.contains(&WayId(1)));
    }

    #[test]
    fn short_road_leaves_model_untouched() {
        let mut m = RawEntityModel::new();
        let added = m.add_road(
            WayId(1),
            &[(OsmNodeId(1), p(60.0, 30.0))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        assert!(!added);
        assert!(m.is_empty());
    }

    #[test]
    fn intersection_rule() {
        let mut m = RawEntityModel::new();
        // 1 - 2 - 3 along way 1, plus 2 - 4 along way 2.
        m.add_road(
            WayId(1),
            &[(OsmNodeId(1), p(0.0, 0.0)), (OsmNodeId(2), p(0.0, 1.0)), (OsmNodeId(3), p(0.0, 2.0))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        assert!(m.nodes[&OsmNodeId(1)].is_intersection()); // dead end
        assert!(!m.nodes[&OsmNodeId(2)].is_intersection()); // pass-through
        assert!(m.nodes[&OsmNodeId(3)].is_intersection());

        m.add_road(
            WayId(2),
            &[(OsmNodeId(2), p(0.0, 1.0)), (OsmNodeId(4), p(1.0, 1.0))],
            "service",
            None,
            None,
            TagMap::new(),
        );
        assert!(m.nodes[&OsmNodeId(2)].is_intersection()); // branch point
    }

    #[test]
    fn shared_pass_through_node_is_intersection() {
        let mut m = RawEntityModel::new();
        // Way 1 ends at node 2 and way 2 continues from it: degree 2, two ways.
        m.add_road(
            WayId(1),
            &[(OsmNodeId(1), p(0.0, 0.0)), (OsmNodeId(2), p(0.0, 1.0))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        m.add_road(
            WayId(2),
            &[(OsmNodeId(2), p(0.0, 1.0)), (OsmNodeId(3), p(0.0, 2.0))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        let node = &m.nodes[&OsmNodeId(2)];
        assert_eq!(node.neighbors.len(), 2);
        assert!(node.is_intersection());
    }

    #[test]
    fn oneway_detection() {
        let mut m = RawEntityModel::new();
        for (id, value) in [(1, Some("yes")), (2, Some("-1")), (3, None), (4, Some("True"))] {
            m.add_road(
                WayId(id),
                &[(OsmNodeId(id * 10), p(0.0, 0.0)), (OsmNodeId(id * 10 + 1), p(0.0, 1.0))],
                "residential",
                None,
                value.map(str::to_owned),
                TagMap::new(),
            );
        }
        let flags: Vec<bool> = m.roads.iter().map(|r| r.is_oneway()).collect();
        assert_eq!(flags, [true, false, false, true]);
    }

    #[test]
    fn enrich_only_known_nodes() {
        let mut m = RawEntityModel::new();
        m.add_road(
            WayId(1),
            &[(OsmNodeId(1), p(0.0, 0.0)), (OsmNodeId(2), p(0.0, 1.0))],
            "residential",
            None,
            None,
            TagMap::new(),
        );
        assert!(m.enrich_node(OsmNodeId(1), [("crossing".to_owned(), "zebra".to_owned())]));
        assert!(!m.enrich_node(OsmNodeId(99), [("crossing".to_owned(), "zebra".to_owned())]));
        assert_eq!(m.nodes[&OsmNodeId(1)].tags["crossing"], "zebra");
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::ExtractorConfig;

    #[test]
    fn default_vocabularies() {
        let c = ExtractorConfig::default();
        assert!(c.accepts_road("residential", None));
        assert!(c.accepts_road("service", None));
        assert!(!c.accepts_road("motorway", None));
        assert!(c.accepts_building("house"));
        assert!(!c.accepts_building("garage"));
    }

    #[test]
    fn service_subtype_without_service_in_road_types() {
        let c = ExtractorConfig::new(["residential"], ["driveway"], ["house"]);
        assert!(c.accepts_road("service", Some("driveway")));
        assert!(!c.accepts_road("service", Some("drive-through")));
        assert!(!c.accepts_road("service", None));
    }

    #[test]
    fn generic_yes_always_accepted() {
        let c = ExtractorConfig::new(["residential"], Vec::<String>::new(), ["school"]);
        assert!(c.accepts_building("yes"));
        assert!(c.accepts_building("school"));
        assert!(!c.accepts_building("house"));
    }

    #[test]
    fn empty_building_vocabulary_accepts_all() {
        let c = ExtractorConfig::new(["residential"], Vec::<String>::new(), Vec::<String>::new());
        assert!(c.accepts_building("garage"));
    }
}

// ── Extractor ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod extractor {
    use rn_core::{OsmNodeId, WayId};

    use super::helpers::{footprint, tags, way};
    use crate::visitor::{OsmNode, OsmVisitor, WayNode};
    use crate::{AccessGraphExtractor, ExtractorConfig};

    fn street(id: i64, highway: &str, first_node: i64) -> crate::OsmWay {
        way(
            id,
            &[("highway", highway), ("name", "Main"), ("surface", "asphalt")],
            vec![
                WayNode::located(first_node, 60.0, 30.0),
                WayNode::located(first_node + 1, 60.0, 30.001),
                WayNode::located(first_node + 2, 60.0, 30.002),
            ],
        )
    }

    #[test]
    fn accepted_road_is_recorded() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&street(1, "residential", 100));
        let m = ex.into_model();
        assert_eq!(m.roads.len(), 1);
        assert_eq!(m.nodes.len(), 3);
        let road = &m.roads[0];
        assert_eq!(road.highway, "residential");
        assert_eq!(road.name.as_deref(), Some("Main"));
        assert_eq!(road.node_ids, [OsmNodeId(100), OsmNodeId(101), OsmNodeId(102)]);
        // Consumed tags are lifted out; the rest pass through.
        assert!(!road.tags.contains_key("highway"));
        assert_eq!(road.tags["surface"], "asphalt");
    }

    #[test]
    fn rejected_highway_is_ignored() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&street(1, "motorway", 100));
        ex.on_way(&way(2, &[("name", "No highway")], vec![WayNode::located(1, 0.0, 0.0)]));
        assert!(ex.into_model().is_empty());
    }

    #[test]
    fn driveway_accepted_via_service_subtype() {
        let config = ExtractorConfig::new(["residential"], ["driveway"], ["house"]);
        let mut ex = AccessGraphExtractor::new(config);
        let mut w = street(1, "service", 100);
        w.tags.insert("service".into(), "driveway".into());
        ex.on_way(&w);
        ex.on_way(&street(2, "service", 200)); // no sub-type
        let m = ex.into_model();
        assert_eq!(m.roads.len(), 1);
        assert_eq!(m.roads[0].way_id, WayId(1));
    }

    #[test]
    fn unlocated_nodes_are_dropped_and_short_ways_skipped() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&way(
            1,
            &[("highway", "residential")],
            vec![
                WayNode::located(1, 60.0, 30.0),
                WayNode::new(OsmNodeId(2), None),
                WayNode::located(3, 60.0, 30.002),
            ],
        ));
        ex.on_way(&way(
            2,
            &[("highway", "residential")],
            vec![WayNode::located(10, 60.0, 30.0), WayNode::new(OsmNodeId(11), None)],
        ));
        let m = ex.into_model();
        assert_eq!(m.roads.len(), 1);
        assert_eq!(m.roads[0].node_ids, [OsmNodeId(1), OsmNodeId(3)]);
        assert!(!m.nodes.contains_key(&OsmNodeId(10)));
        assert!(m.nodes[&OsmNodeId(1)].neighbors.contains(&OsmNodeId(3)));
    }

    #[test]
    fn building_reduced_to_centroid() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&way(500, &[("building", "house"), ("name", "Дом")], footprint(1, 60.0, 30.0, 0.0002)));
        let m = ex.into_model();
        assert_eq!(m.buildings.len(), 1);
        let b = &m.buildings[0];
        assert_eq!(b.way_id, WayId(500));
        assert_eq!(b.name.as_deref(), Some("Дом"));
        assert!((b.centroid.lat - 60.0001).abs() < 1e-9);
        assert!((b.centroid.lon - 30.0001).abs() < 1e-9);
        // Building vertices are not road nodes.
        assert!(m.nodes.is_empty());
    }

    #[test]
    fn building_name_falls_back_to_housename() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&way(
            1,
            &[("building", "yes"), ("addr:housename", "Rose Cottage")],
            footprint(1, 60.0, 30.0, 0.0001),
        ));
        assert_eq!(ex.model().buildings[0].name.as_deref(), Some("Rose Cottage"));
    }

    #[test]
    fn rejected_or_degenerate_buildings_skipped() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&way(1, &[("building", "garage")], footprint(1, 60.0, 30.0, 0.0001)));
        ex.on_way(&way(2, &[("building", "house")], vec![WayNode::new(OsmNodeId(9), None)]));
        assert!(ex.into_model().buildings.is_empty());
    }

    #[test]
    fn way_can_be_road_and_building() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&way(
            1,
            &[("highway", "residential"), ("building", "yes")],
            footprint(1, 60.0, 30.0, 0.0001),
        ));
        let m = ex.into_model();
        assert_eq!(m.roads.len(), 1);
        assert_eq!(m.buildings.len(), 1);
    }

    #[test]
    fn node_enrichment_filters_vocabulary_and_unknown_nodes() {
        let mut ex = AccessGraphExtractor::default();
        ex.on_way(&street(1, "residential", 100));

        assert!(ex.wants_node(OsmNodeId(101)));
        assert!(!ex.wants_node(OsmNodeId(999)));

        ex.on_node(&OsmNode {
            id:   OsmNodeId(101),
            tags: tags(&[("highway", "traffic_signals"), ("source", "survey")]),
        });
        ex.on_node(&OsmNode { id: OsmNodeId(999), tags: tags(&[("crossing", "zebra")]) });

        let m = ex.into_model();
        let enriched = &m.nodes[&OsmNodeId(101)].tags;
        assert_eq!(enriched.get("highway").map(String::as_str), Some("traffic_signals"));
        assert!(!enriched.contains_key("source"));
        assert!(!m.nodes.contains_key(&OsmNodeId(999)));
    }
}

// ── PBF reader ────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "pbf"))]
mod pbf {
    use std::path::Path;

    use crate::{ExtractorConfig, OsmError, extract_from_pbf};

    #[test]
    fn missing_file_is_io_error() {
        let result = extract_from_pbf(Path::new("/nonexistent/city.osm.pbf"), ExtractorConfig::default());
        assert!(matches!(result, Err(OsmError::Io(_))));
    }
}
