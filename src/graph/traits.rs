use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight: an unsigned primitive integer, so weights are never negative
pub trait Weight: PrimInt + Unsigned + Debug + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Send + Sync {}

/// Trait representing a weighted undirected graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the `(neighbor, weight)` entries of a vertex
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if `to` appears in the neighbor list of `from`
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
///
/// Both operations touch the two directed entries of an edge together.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds the undirected edge `{from, to}` with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Updates the weight of an existing edge in both directions
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
