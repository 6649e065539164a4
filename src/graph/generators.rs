use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Largest number of edges a simple undirected graph on `vertices` can hold
pub fn max_simple_edges(vertices: usize) -> usize {
    vertices.saturating_mul(vertices.saturating_sub(1)) / 2
}

/// Seeded generator of connected random graphs with an exact edge count
///
/// Generation runs in two phases. The spanning phase attaches every vertex to
/// the component containing vertex 0; the densification phase then adds
/// uniformly random new pairs until the edge limit is reached. All edges get
/// weight zero; use [`RandomWeightAssigner`](crate::graph::RandomWeightAssigner)
/// to cost them.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator {
    seed: u64,
    clamp_edge_limit: bool,
}

impl RandomGraphGenerator {
    /// Creates a generator that draws from `seed`
    pub fn new(seed: u64) -> Self {
        RandomGraphGenerator {
            seed,
            clamp_edge_limit: false,
        }
    }

    /// Clamp edge limits above `V*(V-1)/2` instead of rejecting them
    pub fn clamp_edge_limit(mut self, clamp: bool) -> Self {
        self.clamp_edge_limit = clamp;
        self
    }

    /// The seed this generator draws from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a graph on `vertex_count` vertices with `edge_limit` edges.
    ///
    /// The result is connected whenever `edge_limit >= vertex_count - 1`.
    /// Identical seeds and arguments produce identical graphs.
    pub fn generate<W: Weight>(&self, vertex_count: usize, edge_limit: usize) -> Result<UndirectedGraph<W>> {
        let max = max_simple_edges(vertex_count);
        let edge_limit = if edge_limit <= max {
            edge_limit
        } else if self.clamp_edge_limit {
            debug!("Clamping edge limit {} to {}", edge_limit, max);
            max
        } else {
            return Err(Error::UnsatisfiableEdgeLimit {
                requested: edge_limit,
                max,
            });
        };

        let mut graph = UndirectedGraph::new(vertex_count);
        if vertex_count < 2 {
            return Ok(graph);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut existing: HashSet<(usize, usize)> = HashSet::new();

        let mut connected = vec![false; vertex_count];
        connected[0] = true;
        let mut connected_count = 1;

        // Spanning phase
        while connected_count < vertex_count && graph.edge_count() < edge_limit {
            let mut u = rng.gen_range(0..vertex_count);
            while !connected[u] {
                u = rng.gen_range(0..vertex_count);
            }

            let mut v = rng.gen_range(0..vertex_count);
            while connected[v] || u == v {
                v = rng.gen_range(0..vertex_count);
            }

            graph.add_edge(u, v, W::zero())?;
            existing.insert(canonical(u, v));
            connected[v] = true;
            connected_count += 1;
        }

        if connected_count < vertex_count {
            warn!(
                "Edge limit {} is below the {} edges needed to connect {} vertices; {} left disconnected",
                edge_limit,
                vertex_count - 1,
                vertex_count,
                vertex_count - connected_count
            );
        }
        debug!(
            "Spanning phase placed {} edges over {} vertices",
            graph.edge_count(),
            connected_count
        );

        // Densification phase
        while graph.edge_count() < edge_limit {
            let u = rng.gen_range(0..vertex_count);
            let v = rng.gen_range(0..vertex_count);
            if u == v {
                continue;
            }

            let pair = canonical(u, v);
            if !existing.insert(pair) {
                continue;
            }
            graph.add_edge(pair.0, pair.1, W::zero())?;
        }

        debug!(
            "Generated graph with {} vertices and {} edges (seed {})",
            vertex_count,
            graph.edge_count(),
            self.seed
        );

        Ok(graph)
    }
}

fn canonical(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}
