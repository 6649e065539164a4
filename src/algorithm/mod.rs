pub mod traits;
pub mod dijkstra;

pub use traits::{DistanceTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
