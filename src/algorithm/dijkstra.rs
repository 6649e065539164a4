use log::debug;
use rayon::prelude::*;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
///
/// The heap has no decrease-key: an improved distance is pushed as a new
/// entry and the outdated one is skipped when popped. Weights are unsigned,
/// so the non-negative precondition always holds.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs an independent search from each source, in parallel.
    ///
    /// Every search owns its heap and distance table; the graph is only read.
    /// Results come back in the order of `sources`.
    pub fn compute_many<W, G>(&self, graph: &G, sources: &[usize]) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
    {
        sources
            .par_iter()
            .map(|&source| <Self as ShortestPathAlgorithm<W, G>>::compute_shortest_paths(self, graph, source))
            .collect()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::with_capacity(n);
        queue.push(W::zero(), source);
        stats.heap_pushes += 1;

        while !queue.is_empty() {
            let entry = queue.pop()?;
            stats.heap_pops += 1;
            let u = entry.vertex;

            // Stale entry: a shorter distance to u was found after this push
            let dist_u = match distances[u] {
                Some(current) if entry.distance > current => {
                    stats.stale_entries += 1;
                    continue;
                }
                Some(current) => current,
                None => continue,
            };

            for (v, weight) in graph.neighbors(u) {
                // A sum that overflows W can never be shorter
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(new_dist, v);
                    stats.relaxations += 1;
                    stats.heap_pushes += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} pops, {} stale, {} relaxations",
            source, stats.heap_pops, stats.stale_entries, stats.relaxations
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}
