use std::collections::HashSet;

use undirected_sssp::graph::{max_simple_edges, Graph, MutableGraph, RandomGraphGenerator, RandomWeightAssigner};
use undirected_sssp::{assign_random_weights, build_random_graph, Error, UndirectedGraph};

// Every entry has a mirror with the same weight, and there are no loops or parallel edges
fn assert_simple_and_symmetric(graph: &UndirectedGraph<u32>) {
    for u in 0..graph.vertex_count() {
        let mut seen = HashSet::new();
        for (v, weight) in graph.neighbors(u) {
            assert_ne!(u, v, "self-loop at {}", u);
            assert!(seen.insert(v), "parallel edge {}-{}", u, v);
            assert!(graph.has_edge(v, u), "edge {}-{} missing its reverse", u, v);
            assert_eq!(graph.edge_weight(v, u), Some(weight));
        }
    }
}

#[test]
fn test_generated_graph_is_connected() {
    for seed in 0..10 {
        let graph: UndirectedGraph<u32> = RandomGraphGenerator::new(seed).generate(60, 59 + seed as usize * 20).unwrap();
        assert!(graph.is_connected(), "seed {} produced a disconnected graph", seed);
    }
}

#[test]
fn test_spanning_tree_only() {
    let graph: UndirectedGraph<u32> = build_random_graph(100, 99, 1051962).unwrap();
    assert_eq!(graph.edge_count(), 99);
    assert!(graph.is_connected());
}

#[test]
fn test_exact_edge_count_without_duplicates() {
    for &(n, e) in &[(10usize, 9usize), (10, 30), (25, 200), (40, 400)] {
        let graph: UndirectedGraph<u32> = build_random_graph(n, e, 3).unwrap();
        assert_eq!(graph.edge_count(), e);

        let pairs: HashSet<(usize, usize)> = graph.edges().map(|(u, v, _)| (u, v)).collect();
        assert_eq!(pairs.len(), e);
        assert_simple_and_symmetric(&graph);
    }
}

#[test]
fn test_complete_graph_is_reachable() {
    let n = 20;
    let graph: UndirectedGraph<u32> = build_random_graph(n, max_simple_edges(n), 11).unwrap();
    assert_eq!(graph.edge_count(), 190);
    for u in 0..n {
        assert_eq!(graph.degree(u), n - 1);
    }
}

#[test]
fn test_unsatisfiable_edge_limit_fails_fast() {
    let err = build_random_graph::<u32>(5, 11, 0).unwrap_err();
    assert_eq!(err, Error::UnsatisfiableEdgeLimit { requested: 11, max: 10 });
}

#[test]
fn test_clamped_edge_limit() {
    let graph: UndirectedGraph<u32> = RandomGraphGenerator::new(0)
        .clamp_edge_limit(true)
        .generate(6, 1_000)
        .unwrap();
    assert_eq!(graph.edge_count(), max_simple_edges(6));
}

#[test]
fn test_edge_limit_below_spanning_tree_leaves_graph_disconnected() {
    let graph: UndirectedGraph<u32> = build_random_graph(10, 4, 5).unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert!(!graph.is_connected());
}

#[test]
fn test_degenerate_vertex_counts() {
    let empty: UndirectedGraph<u32> = build_random_graph(0, 0, 1).unwrap();
    assert_eq!(empty.vertex_count(), 0);

    let single: UndirectedGraph<u32> = build_random_graph(1, 0, 1).unwrap();
    assert_eq!(single.vertex_count(), 1);
    assert!(single.is_connected());

    assert!(build_random_graph::<u32>(1, 1, 1).is_err());
}

#[test]
fn test_same_seed_same_graph() {
    let a: UndirectedGraph<u32> = build_random_graph(80, 300, 1051962).unwrap();
    let b: UndirectedGraph<u32> = build_random_graph(80, 300, 1051962).unwrap();
    assert_eq!(a, b);

    let c: UndirectedGraph<u32> = build_random_graph(80, 300, 1051963).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_generated_edges_start_at_zero_weight() {
    let graph: UndirectedGraph<u32> = build_random_graph(30, 60, 2).unwrap();
    assert!(graph.edges().all(|(_, _, w)| w == 0));
}

#[test]
fn test_weights_are_symmetric_and_in_range() {
    let mut graph: UndirectedGraph<u32> = build_random_graph(50, 300, 9).unwrap();
    assign_random_weights(&mut graph, 9, 1, 50).unwrap();

    assert_simple_and_symmetric(&graph);
    assert!(graph.edges().all(|(_, _, w)| (1..=50).contains(&w)));
}

#[test]
fn test_weight_assignment_is_reproducible() {
    let base: UndirectedGraph<u32> = build_random_graph(40, 120, 4).unwrap();

    let mut a = base.clone();
    let mut b = base.clone();
    assign_random_weights(&mut a, 77, 0, 1_000).unwrap();
    assign_random_weights(&mut b, 77, 0, 1_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_single_value_weight_range() {
    let mut graph: UndirectedGraph<u32> = build_random_graph(10, 20, 1).unwrap();
    RandomWeightAssigner::new(3, 7, 7).unwrap().assign(&mut graph);
    assert!(graph.edges().all(|(_, _, w)| w == 7));
}

#[test]
fn test_invalid_weight_range() {
    assert_eq!(RandomWeightAssigner::<u32>::new(0, 10, 1).unwrap_err(), Error::InvalidWeightRange);
}

#[test]
fn test_manual_edges_are_validated() {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(3);
    assert_eq!(graph.add_edge(0, 3, 1), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.add_edge(1, 1, 1), Err(Error::SelfLoop(1)));
    assert_eq!(graph.edge_count(), 0);

    graph.add_edge(0, 2, 4).unwrap();
    assert!(graph.has_edge(0, 2) && graph.has_edge(2, 0));
    assert!(!graph.has_edge(0, 1));
    assert!(!graph.has_edge(9, 0));
}

#[test]
fn test_update_edge_weight_changes_both_directions() {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::from_edges(3, &[(0, 1, 1), (1, 2, 2)]).unwrap();
    graph.update_edge_weight(2, 1, 9).unwrap();
    assert_eq!(graph.edge_weight(1, 2), Some(9));
    assert_eq!(graph.edge_weight(2, 1), Some(9));

    assert_eq!(graph.update_edge_weight(0, 2, 5), Err(Error::EdgeNotFound(0, 2)));
    assert_eq!(graph.update_edge_weight(0, 7, 5), Err(Error::InvalidVertex(7)));
}
