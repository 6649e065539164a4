use log::debug;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::graph::traits::{Graph, Weight};
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Assigns seeded uniform random weights in `[min, max]` to every edge
#[derive(Debug, Clone)]
pub struct RandomWeightAssigner<W>
where
    W: Weight + SampleUniform,
{
    seed: u64,
    min: W,
    max: W,
}

impl<W> RandomWeightAssigner<W>
where
    W: Weight + SampleUniform,
{
    /// Creates an assigner for the inclusive range `[min, max]`
    pub fn new(seed: u64, min: W, max: W) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidWeightRange);
        }
        Ok(RandomWeightAssigner { seed, min, max })
    }

    /// Draws one weight per undirected edge and stores it in both directions.
    ///
    /// Edges are drawn in a fixed order (lower endpoint ascending, then
    /// neighbor-list order), so the same seed and graph always produce the
    /// same weights.
    pub fn assign(&self, graph: &mut UndirectedGraph<W>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let dist = Uniform::new_inclusive(self.min, self.max);

        graph.reweigh_edges(|_, _| dist.sample(&mut rng));

        debug!(
            "Assigned weights in [{:?}, {:?}] to {} edges (seed {})",
            self.min,
            self.max,
            graph.edge_count(),
            self.seed
        );
    }
}
