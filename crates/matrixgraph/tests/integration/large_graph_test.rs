//! Integration test for graphs at the configured vertex limit.

use matrixgraph::{GraphConfig, MatrixGraph, DEFAULT_MAX_VERTICES};

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_floyd_at_default_capacity() {
    let n = DEFAULT_MAX_VERTICES;
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(n).unwrap();

    // Ring 0 -> 1 -> ... -> n-1 -> 0
    for v in 0..n {
        graph.link(v, (v + 1) % n, 1).unwrap();
    }

    let all = graph.floyd().unwrap();
    assert_eq!(all.distance(0, n - 1), Some((n - 1) as i64));
    assert_eq!(all.distance(n - 1, 0), Some(1));
}

#[test]
fn test_medium_ring_graph() {
    let n = 200;
    let config = GraphConfig::default().with_max_vertices(n);
    let mut graph = MatrixGraph::with_config(config).unwrap();
    graph.set_vertex_count(n).unwrap();

    for v in 0..n {
        graph.link(v, (v + 1) % n, 2).unwrap();
    }
    // Shortcut halfway around
    graph.link(0, n / 2, 5).unwrap();

    assert_eq!(graph.edge_count(), n + 1);
    assert_eq!(graph.reachable(0).unwrap(), n);
    assert_eq!(graph.dfs_order(0).unwrap().len(), n);

    let paths = graph.dijkstra(0).unwrap();
    assert_eq!(paths.distance(n / 2), Some(5));
    assert_eq!(paths.distance(n / 2 + 1), Some(7));
    assert_eq!(paths.distance(n - 1), Some(5 + 2 * (n / 2 - 1) as i64));
    assert_eq!(paths.route_to(n / 2 + 1), Some(vec![0, n / 2, n / 2 + 1]));
}

#[test]
fn test_config_loaded_from_json_limits_graph() {
    let config = GraphConfig::from_json_str(r#"{ "max_vertices": 64 }"#).unwrap();
    let mut graph = MatrixGraph::with_config(config).unwrap();

    graph.set_vertex_count(64).unwrap();
    assert!(graph.set_vertex_count(65).is_err());
    assert_eq!(graph.config().max_vertices, 64);
}
