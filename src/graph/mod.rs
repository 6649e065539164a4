pub mod traits;
pub mod undirected;
pub mod generators;
pub mod weights;

pub use traits::{Graph, MutableGraph, Weight};
pub use undirected::UndirectedGraph;
pub use generators::{max_simple_edges, RandomGraphGenerator};
pub use weights::RandomWeightAssigner;
