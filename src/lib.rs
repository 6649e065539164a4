//! Undirected SSSP - Dijkstra over seeded random undirected graphs
//!
//! This library builds connected undirected graphs from an explicit seed,
//! assigns them random integer edge costs and computes single-source shortest
//! paths with a lazy-deletion binary heap.
//!
//! ```no_run
//! use undirected_sssp::{assign_random_weights, build_random_graph, shortest_paths};
//!
//! let mut graph = build_random_graph::<u64>(100, 300, 1051962).unwrap();
//! assign_random_weights(&mut graph, 1051962, 1, 50).unwrap();
//! let distances = shortest_paths(&graph, 0).unwrap();
//! assert_eq!(distances[0], Some(0));
//! ```

pub mod algorithm;
pub mod config;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod web;

use rand::distributions::uniform::SampleUniform;

pub use algorithm::{
    dijkstra::Dijkstra, DistanceTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use graph::{RandomGraphGenerator, RandomWeightAssigner, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    #[error("No edge between {0} and {1}")]
    EdgeNotFound(usize, usize),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Edge limit {requested} exceeds the {max} edges a simple graph can hold")]
    UnsatisfiableEdgeLimit { requested: usize, max: usize },

    #[error("Invalid weight range: minimum is greater than maximum")]
    InvalidWeightRange,

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Builds a connected random graph with `edge_limit` zero-weight edges.
///
/// Fails with [`Error::UnsatisfiableEdgeLimit`] when `edge_limit` exceeds
/// `vertex_count * (vertex_count - 1) / 2`.
pub fn build_random_graph<W: Weight>(
    vertex_count: usize,
    edge_limit: usize,
    seed: u64,
) -> Result<UndirectedGraph<W>> {
    RandomGraphGenerator::new(seed).generate(vertex_count, edge_limit)
}

/// Draws one weight in `[min_weight, max_weight]` per undirected edge, in place.
pub fn assign_random_weights<W>(
    graph: &mut UndirectedGraph<W>,
    seed: u64,
    min_weight: W,
    max_weight: W,
) -> Result<()>
where
    W: Weight + SampleUniform,
{
    RandomWeightAssigner::new(seed, min_weight, max_weight)?.assign(graph);
    Ok(())
}

/// Shortest distance from `source` to every vertex; `None` marks unreachable.
pub fn shortest_paths<W: Weight>(graph: &UndirectedGraph<W>, source: usize) -> Result<DistanceTable<W>> {
    <Dijkstra as ShortestPathAlgorithm<W, UndirectedGraph<W>>>::compute_shortest_paths(&Dijkstra::new(), graph, source)
        .map(|result| result.distances)
}
