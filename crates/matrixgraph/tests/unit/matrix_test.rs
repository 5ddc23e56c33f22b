//! Unit tests for the matrix store and edge operations (set_vertex_count, link, unlink, is_adjacent).

use matrixgraph::{Edge, GraphConfig, GraphError, MatrixGraph, INFINITY};

#[test]
fn test_fresh_graph_has_no_edges() {
    for n in [0usize, 1, 2, 5, 16] {
        let mut graph = MatrixGraph::new();
        graph.set_vertex_count(n).unwrap();

        assert_eq!(graph.vertex_count(), n);
        for i in 0..n {
            for j in 0..n {
                assert!(!graph.is_adjacent(i, j).unwrap(), "{i} -> {j} in fresh graph of {n}");
            }
        }
        assert_eq!(graph.edge_count(), 0);
    }
}

#[test]
fn test_link_is_directed() {
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(3).unwrap();

    graph.link(0, 2, 7).unwrap();

    assert!(graph.is_adjacent(0, 2).unwrap());
    assert!(!graph.is_adjacent(2, 0).unwrap());

    graph.link(2, 0, 1).unwrap();
    assert!(graph.is_adjacent(2, 0).unwrap());
    assert_eq!(graph.weight(0, 2).unwrap(), Some(7));
    assert_eq!(graph.weight(2, 0).unwrap(), Some(1));
}

#[test]
fn test_link_unlink_round_trip() {
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(2).unwrap();

    graph.link(0, 1, 3).unwrap();
    graph.unlink(0, 1).unwrap();

    assert!(!graph.is_adjacent(0, 1).unwrap());
    assert_eq!(graph.weight(0, 1).unwrap(), None);
}

#[test]
fn test_unlink_missing_edge_is_noop() {
    let mut graph = MatrixGraph::from_edges(3, [(1, 2, 4)]).unwrap();

    graph.unlink(0, 1).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_adjacent(1, 2).unwrap());
}

#[test]
fn test_zero_and_negative_weights_are_edges() {
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(2).unwrap();

    graph.link(0, 1, 0).unwrap();
    graph.link(1, 0, -5).unwrap();

    assert!(graph.is_adjacent(0, 1).unwrap());
    assert_eq!(graph.weight(0, 1).unwrap(), Some(0));
    assert_eq!(graph.weight(1, 0).unwrap(), Some(-5));
}

#[test]
fn test_relink_overwrites_weight() {
    let mut graph = MatrixGraph::from_edges(2, [(0, 1, 9)]).unwrap();

    graph.link(0, 1, 2).unwrap();

    assert_eq!(graph.weight(0, 1).unwrap(), Some(2));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_loop_is_allowed() {
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(1).unwrap();

    graph.link(0, 0, 4).unwrap();

    assert!(graph.is_adjacent(0, 0).unwrap());
    assert!(graph.edges().next().unwrap().is_self_loop());
}

#[test]
fn test_out_of_bounds_never_corrupts_matrix() {
    let mut graph = MatrixGraph::from_edges(3, [(0, 1, 1), (1, 2, 2)]).unwrap();
    let before = graph.clone();

    assert!(graph.link(3, 0, 1).unwrap_err().is_out_of_bounds());
    assert!(graph.link(0, 3, 1).unwrap_err().is_out_of_bounds());
    assert!(graph.unlink(usize::MAX, 0).unwrap_err().is_out_of_bounds());
    assert!(graph.is_adjacent(0, 99).unwrap_err().is_out_of_bounds());
    assert!(graph.weight(5, 5).unwrap_err().is_out_of_bounds());
    assert!(graph.neighbors(3).is_err());

    assert_eq!(graph, before);
}

#[test]
fn test_out_of_bounds_error_reports_vertex() {
    let graph = MatrixGraph::from_edges(2, []).unwrap();

    match graph.is_adjacent(0, 4) {
        Err(GraphError::VertexOutOfBounds {
            vertex,
            vertex_count,
        }) => {
            assert_eq!(vertex, 4);
            assert_eq!(vertex_count, 2);
        }
        other => panic!("expected bounds error, got {other:?}"),
    }
}

#[test]
fn test_capacity_exceeded_keeps_prior_matrix() {
    let config = GraphConfig::default().with_max_vertices(4);
    let mut graph = MatrixGraph::with_config(config).unwrap();
    graph.set_vertex_count(3).unwrap();
    graph.link(0, 1, 1).unwrap();

    let err = graph.set_vertex_count(5).unwrap_err();
    assert!(matches!(
        err,
        GraphError::CapacityExceeded {
            requested: 5,
            max: 4
        }
    ));

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.is_adjacent(0, 1).unwrap());

    graph.set_vertex_count(4).unwrap();
    assert_eq!(graph.vertex_count(), 4);
}

#[test]
fn test_set_vertex_count_is_full_reset() {
    let mut graph = MatrixGraph::from_edges(2, [(0, 1, 1)]).unwrap();

    graph.set_vertex_count(3).unwrap();

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_grow_refuses_to_shrink() {
    let mut graph = MatrixGraph::from_edges(3, [(0, 1, 1)]).unwrap();

    let err = graph.grow(2).unwrap_err();
    assert!(matches!(
        err,
        GraphError::ShrinkNotSupported {
            current: 3,
            requested: 2
        }
    ));
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_grow_respects_capacity() {
    let config = GraphConfig::default().with_max_vertices(3);
    let mut graph = MatrixGraph::with_config(config).unwrap();
    graph.set_vertex_count(2).unwrap();

    assert!(matches!(
        graph.grow(4).unwrap_err(),
        GraphError::CapacityExceeded { .. }
    ));
    graph.grow(3).unwrap();
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_oversized_matrix_is_capacity_error() {
    // n * n does not fit in usize even though n is under the configured limit
    let huge = usize::MAX / 2;
    let config = GraphConfig::default().with_max_vertices(usize::MAX);
    let mut graph = MatrixGraph::with_config(config).unwrap();
    graph.set_vertex_count(2).unwrap();
    graph.link(0, 1, 7).unwrap();

    let err = graph.set_vertex_count(huge).unwrap_err();
    assert!(matches!(
        err,
        GraphError::CapacityExceeded { requested, max } if requested == huge && max == usize::MAX
    ));
    assert!(matches!(
        graph.grow(huge).unwrap_err(),
        GraphError::CapacityExceeded { .. }
    ));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.weight(0, 1).unwrap(), Some(7));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let err = MatrixGraph::with_config(GraphConfig::default().with_max_vertices(0)).unwrap_err();
    assert!(matches!(err, GraphError::Config { .. }));
}

#[test]
fn test_sentinel_weight_rejected() {
    let mut graph = MatrixGraph::from_edges(2, []).unwrap();

    assert!(matches!(
        graph.link(0, 1, INFINITY).unwrap_err(),
        GraphError::InvalidWeight { .. }
    ));
    assert!(!graph.is_adjacent(0, 1).unwrap());
}

#[test]
fn test_neighbors_in_ascending_order() {
    let graph = MatrixGraph::from_edges(4, [(1, 3, 3), (1, 0, 1), (1, 2, 2)]).unwrap();

    let neighbors: Vec<_> = graph.neighbors(1).unwrap().collect();
    assert_eq!(neighbors, vec![(0, 1), (2, 2), (3, 3)]);
    assert_eq!(graph.neighbors(0).unwrap().count(), 0);
}

#[test]
fn test_edges_in_row_major_order() {
    let graph = MatrixGraph::from_edges(3, [(2, 0, 5), (0, 2, 1), (0, 1, 4)]).unwrap();

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![Edge::new(0, 1, 4), Edge::new(0, 2, 1), Edge::new(2, 0, 5)]
    );
}
