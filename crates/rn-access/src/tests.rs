//! Unit tests for rn-access.

#[cfg(test)]
mod helpers {
    use rn_core::{GeoPoint, OsmNodeId, TagMap, WayId};
    use rn_osm::{RawBuilding, RawEntityModel};

    use crate::{AccessGraph, AccessKey};

    pub fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    pub fn road(model: &mut RawEntityModel, way: i64, nodes: &[(i64, GeoPoint)], oneway: Option<&str>) {
        let nodes: Vec<(OsmNodeId, GeoPoint)> = nodes.iter().map(|&(id, pos)| (OsmNodeId(id), pos)).collect();
        assert!(model.add_road(
            WayId(way),
            &nodes,
            "residential",
            Some(format!("Street {way}")),
            oneway.map(str::to_owned),
            TagMap::new(),
        ));
    }

    pub fn building(model: &mut RawEntityModel, way: i64, centroid: GeoPoint) {
        model.add_building(RawBuilding {
            way_id: WayId(way),
            centroid,
            name: Some(format!("House {way}")),
            tags: [("building".to_owned(), "house".to_owned())].into_iter().collect(),
        });
    }

    /// Three nodes in a row along one two-way street near (60, 30).
    pub fn straight_street(oneway: Option<&str>) -> RawEntityModel {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(60.0, 30.0)), (2, p(60.0, 30.001)), (3, p(60.0, 30.002))], oneway);
        m
    }

    pub fn assert_closed(graph: &AccessGraph) {
        let keys = graph.node_keys();
        for edge in &graph.edges {
            assert!(keys.contains(&edge.source), "dangling source {}", edge.source);
            assert!(keys.contains(&edge.target), "dangling target {}", edge.target);
        }
    }

    pub fn node(id: i64) -> AccessKey {
        AccessKey::Node(OsmNodeId(id))
    }
}

// ── Config & payload ──────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use rn_core::{OsmNodeId, RnError, WayId};

    use crate::{AccessError, AccessKey, AssemblerConfig, DEFAULT_SNAP_DISTANCE_M};

    #[test]
    fn default_snap_distance() {
        assert_eq!(AssemblerConfig::default().snap_distance_m, DEFAULT_SNAP_DISTANCE_M);
        assert_eq!(DEFAULT_SNAP_DISTANCE_M, 80.0);
    }

    #[test]
    fn invalid_snap_distance_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(AssemblerConfig::new(bad), Err(RnError::Config(_))), "{bad} accepted");
        }
        assert!(AssemblerConfig::new(0.0).is_ok());
        assert_eq!(AssemblerConfig::new(25.0).unwrap().snap_distance_m, 25.0);

        let err: AccessError = AssemblerConfig::new(-5.0).unwrap_err().into();
        assert!(matches!(err, AccessError::Core(RnError::Config(_))));
        assert!(err.to_string().contains("snap distance"));
    }

    #[test]
    fn key_namespaces() {
        assert_eq!(AccessKey::Node(OsmNodeId(42)).to_string(), "node:42");
        assert_eq!(AccessKey::Building(WayId(42)).to_string(), "building:42");
        assert_ne!(AccessKey::Node(OsmNodeId(42)), AccessKey::Building(WayId(42)));
        assert!(AccessKey::Node(OsmNodeId(i64::MAX)) < AccessKey::Building(WayId(0)));
    }
}

// ── Locator ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod locator {
    use rn_core::{GeoPoint, OsmNodeId};

    use super::helpers::p;
    use crate::NodeLocator;

    fn cluster() -> Vec<(OsmNodeId, GeoPoint)> {
        vec![
            (OsmNodeId(1), p(60.0000, 30.0000)),
            (OsmNodeId(2), p(60.0004, 30.0003)),
            (OsmNodeId(3), p(60.0008, 30.0001)),
            (OsmNodeId(4), p(59.9995, 30.0009)),
        ]
    }

    #[test]
    fn index_reports_haversine_distance() {
        let locator = NodeLocator::new(cluster());
        assert!(locator.has_index());
        let query = p(60.0005, 30.0004);
        let hit = locator.nearest_by_index(query).unwrap();
        assert_eq!(hit.id, OsmNodeId(2));
        let exact = query.distance_m(p(60.0004, 30.0003));
        assert!((hit.distance_m - exact).abs() < 1e-9);
    }

    #[test]
    fn tiers_agree() {
        let indexed = NodeLocator::new(cluster());
        let plain = NodeLocator::without_index(cluster());
        assert!(!plain.has_index());
        assert!(plain.nearest_by_index(p(60.0, 30.0)).is_none());

        for query in [p(60.0005, 30.0004), p(60.0001, 29.9999), p(59.9996, 30.0008), p(60.0009, 30.0002)] {
            let by_index = indexed.nearest_by_index(query).unwrap();
            let by_grid = plain.nearest_by_grid(query).unwrap();
            let by_scan = plain.nearest_by_scan(query).unwrap();
            assert_eq!(by_index, by_grid, "query {query}");
            assert_eq!(by_grid, by_scan, "query {query}");
            assert_eq!(plain.nearest(query), Some(by_scan));
        }
    }

    #[test]
    fn empty_neighbourhood_falls_back_to_scan() {
        let plain = NodeLocator::without_index(cluster());
        let far = p(61.0, 31.0);
        assert!(plain.nearest_by_grid(far).is_none());
        let by_scan = plain.nearest_by_scan(far).unwrap();
        assert_eq!(plain.nearest(far), Some(by_scan));
        // The scan answer really is the global minimum.
        for (_, pos) in cluster() {
            assert!(by_scan.distance_m <= far.distance_m(pos));
        }
    }

    #[test]
    fn empty_locator_and_bad_query() {
        let empty = NodeLocator::new(Vec::new());
        assert!(empty.is_empty());
        assert!(!empty.has_index());
        assert!(empty.nearest(p(60.0, 30.0)).is_none());

        let locator = NodeLocator::new(cluster());
        assert_eq!(locator.len(), 4);
        assert!(locator.nearest(p(f64::NAN, 30.0)).is_none());
    }

    #[test]
    fn huge_coordinates_do_not_overflow_grid() {
        let plain = NodeLocator::without_index(cluster());
        for far in [p(1e300, 1e300), p(-1e300, -1e300), p(1e300, -1e300)] {
            assert!(plain.nearest_by_grid(far).is_none());
            let _ = plain.nearest(far);
        }
    }
}

// ── Assembler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembler {
    use rn_core::{OsmNodeId, RnError, WayId};
    use rn_osm::RawEntityModel;

    use super::helpers::{assert_closed, building, node, p, road, straight_street};
    use crate::{
        AccessError, AccessGraphAssembler, AccessKey, AssemblerConfig, BUILDING_LINK, NodeType, assemble,
    };

    fn build(model: &RawEntityModel) -> crate::AccessGraph {
        assemble(model, AssemblerConfig::default()).unwrap()
    }

    #[test]
    fn empty_model_gives_empty_graph() {
        assert!(build(&RawEntityModel::new()).is_empty());

        let mut only_buildings = RawEntityModel::new();
        building(&mut only_buildings, 500, p(60.0, 30.0));
        assert!(build(&only_buildings).is_empty());
    }

    #[test]
    fn pass_through_nodes_are_not_vertices() {
        let g = build(&straight_street(None));
        let keys: Vec<AccessKey> = g.nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, [node(1), node(3)]);
        assert!(g.nodes.iter().all(|n| n.node_type == NodeType::Intersection));
    }

    #[test]
    fn two_way_segment_gives_two_mirrored_arcs() {
        let g = build(&straight_street(None));
        assert_eq!(g.edges.len(), 2);
        let (fwd, rev) = (&g.edges[0], &g.edges[1]);
        assert_eq!((fwd.source, fwd.target), (node(1), node(3)));
        assert_eq!((rev.source, rev.target), (node(3), node(1)));
        assert_eq!(fwd.length_m, rev.length_m);
        assert_eq!(fwd.way_id, Some(WayId(10)));
        assert_eq!(fwd.road_type, "residential");
        assert_eq!(fwd.name.as_deref(), Some("Street 10"));
        assert!(!fwd.is_building_link);

        // Length is the summed haversine of both hops, not the chord.
        let expected = p(60.0, 30.0).distance_m(p(60.0, 30.001)) + p(60.0, 30.001).distance_m(p(60.0, 30.002));
        assert!((fwd.length_m - expected).abs() < 1e-9);
    }

    #[test]
    fn oneway_segment_gives_one_arc() {
        for tag in ["yes", "1", "TRUE"] {
            let g = build(&straight_street(Some(tag)));
            assert_eq!(g.edges.len(), 1, "oneway={tag}");
            assert_eq!((g.edges[0].source, g.edges[0].target), (node(1), node(3)));
        }
        assert_eq!(build(&straight_street(Some("no"))).edges.len(), 2);
    }

    #[test]
    fn building_in_range_links_both_ways_and_splits_road() {
        let mut m = straight_street(None);
        building(&mut m, 500, p(60.0001, 30.001));
        let g = build(&m);
        assert_closed(&g);

        let buildings: Vec<_> = g.nodes.iter().filter(|n| n.node_type == NodeType::Building).collect();
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].key, AccessKey::Building(WayId(500)));
        assert_eq!(buildings[0].name.as_deref(), Some("House 500"));

        let links: Vec<_> = g.edges.iter().filter(|e| e.is_building_link).collect();
        assert_eq!(links.len(), 2);
        assert_eq!((links[0].source, links[0].target), (AccessKey::Building(WayId(500)), node(2)));
        assert_eq!((links[1].source, links[1].target), (node(2), AccessKey::Building(WayId(500))));
        for link in &links {
            assert_eq!(link.road_type, BUILDING_LINK);
            assert_eq!(link.way_id, None);
            let expected = p(60.0001, 30.001).distance_m(p(60.0, 30.001));
            assert!((link.length_m - expected).abs() < 1e-9);
        }

        // Node 2 became a vertex, so the street is now two segments.
        assert!(g.nodes.iter().any(|n| n.key == node(2)));
        assert_eq!(g.edges.iter().filter(|e| e.way_id == Some(WayId(10))).count(), 4);
    }

    #[test]
    fn duplicate_buildings_share_one_node() {
        let mut m = straight_street(None);
        building(&mut m, 500, p(60.0001, 30.001));
        building(&mut m, 500, p(60.0001, 30.001));
        let g = build(&m);
        assert_closed(&g);
        assert_eq!(g.nodes.iter().filter(|n| n.node_type == NodeType::Building).count(), 1);
        assert_eq!(g.building_link_count(), 4);
    }

    #[test]
    fn far_building_is_dropped() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(30.0, 60.0)), (2, p(30.0, 60.001)), (3, p(30.001, 60.001))], None);
        building(&mut m, 500, p(35.0, 65.0));
        let g = assemble(&m, AssemblerConfig::new(10.0).unwrap()).unwrap();
        assert!(g.nodes.iter().all(|n| n.node_type != NodeType::Building));
        assert_eq!(g.building_link_count(), 0);
        assert_closed(&g);
    }

    #[test]
    fn hand_built_config_is_validated() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(30.0, 60.0)), (2, p(30.0, 60.001))], None);
        building(&mut m, 500, p(35.0, 65.0));

        for snap_distance_m in [f64::NAN, -5.0, f64::INFINITY] {
            let config = AssemblerConfig { snap_distance_m };
            assert!(config.validate().is_err());
            assert!(matches!(assemble(&m, config), Err(AccessError::Core(RnError::Config(_)))));
            assert!(AccessGraphAssembler::new(&m, config).is_err());
        }

        let zero = assemble(&m, AssemblerConfig { snap_distance_m: 0.0 }).unwrap();
        assert_eq!(zero.building_link_count(), 0);
    }

    #[test]
    fn snap_distance_is_inclusive_bound() {
        let mut m = straight_street(None);
        building(&mut m, 500, p(60.0001, 30.001));
        let d = p(60.0001, 30.001).distance_m(p(60.0, 30.001));

        let at = assemble(&m, AssemblerConfig::new(d).unwrap()).unwrap();
        assert_eq!(at.building_link_count(), 2);
        let below = assemble(&m, AssemblerConfig::new(d - 0.01).unwrap()).unwrap();
        assert_eq!(below.building_link_count(), 0);
    }

    #[test]
    fn zero_length_cut_is_skipped() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(60.0, 30.0)), (2, p(60.0, 30.0))], None);
        let g = build(&m);
        assert_eq!(g.nodes.len(), 2);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn loop_back_to_start_emits_nothing() {
        let mut m = RawEntityModel::new();
        // Ring 1 → 2 → 3 → 1, with a stub 1 → 4 making node 1 a vertex.
        road(
            &mut m,
            10,
            &[(1, p(60.0, 30.0)), (2, p(60.0, 30.001)), (3, p(60.001, 30.001)), (1, p(60.0, 30.0))],
            None,
        );
        road(&mut m, 11, &[(1, p(60.0, 30.0)), (4, p(59.999, 30.0))], None);
        let g = build(&m);
        assert_closed(&g);
        assert_eq!(g.edges.len(), 2);
        assert!(g.edges.iter().all(|e| e.way_id == Some(WayId(11))));
    }

    #[test]
    fn junction_splits_both_roads() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(60.0, 30.0)), (2, p(60.0, 30.001)), (3, p(60.0, 30.002))], None);
        road(&mut m, 11, &[(2, p(60.0, 30.001)), (4, p(60.001, 30.001))], Some("yes"));
        let g = build(&m);
        assert_closed(&g);
        let keys: Vec<AccessKey> = g.nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, [node(1), node(2), node(3), node(4)]);
        // 1-2 and 2-3 both ways, plus 2→4 one way.
        assert_eq!(g.edges.len(), 5);
    }

    #[test]
    fn enrichment_tags_reach_intersection_nodes() {
        let mut m = straight_street(None);
        m.enrich_node(OsmNodeId(1), [("crossing".to_owned(), "zebra".to_owned())]);
        let g = build(&m);
        let first = g.nodes.iter().find(|n| n.key == node(1)).unwrap();
        assert_eq!(first.tags.as_ref().unwrap()["crossing"], "zebra");
        let last = g.nodes.iter().find(|n| n.key == node(3)).unwrap();
        assert!(last.tags.is_none());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(5, p(60.0, 30.0)), (3, p(60.0, 30.001)), (9, p(60.0, 30.002))], None);
        road(&mut m, 11, &[(3, p(60.0, 30.001)), (7, p(60.001, 30.001))], None);
        building(&mut m, 600, p(60.0002, 30.0021));
        building(&mut m, 500, p(60.0011, 30.0011));

        let assembler = AccessGraphAssembler::new(&m, AssemblerConfig::default()).unwrap();
        let first = assembler.build();
        let second = assembler.build();
        let fresh = build(&m.clone());
        assert_eq!(first, second);
        assert_eq!(first, fresh);
        assert_closed(&first);

        // Intersections come out sorted by id.
        let ids: Vec<i64> = first
            .nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Intersection)
            .map(|n| n.source_id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn closure_holds_on_mixed_input() {
        let mut m = RawEntityModel::new();
        road(&mut m, 10, &[(1, p(60.0, 30.0)), (2, p(60.0, 30.001)), (3, p(60.0, 30.002))], Some("yes"));
        road(&mut m, 11, &[(3, p(60.0, 30.002)), (4, p(60.001, 30.002)), (5, p(60.002, 30.002))], None);
        for (i, pos) in [p(60.0003, 30.0005), p(60.0015, 30.0024), p(61.0, 31.0)].into_iter().enumerate() {
            building(&mut m, 500 + i as i64, pos);
        }
        let g = build(&m);
        assert_closed(&g);
        // The far building is the only one left out.
        assert_eq!(g.nodes.iter().filter(|n| n.node_type == NodeType::Building).count(), 2);
    }
}
