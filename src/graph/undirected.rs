use std::collections::VecDeque;
use std::fmt;

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// An undirected graph implementation using adjacency lists
///
/// Every edge is stored twice, once in each endpoint's list, with the same
/// weight. The vertex count is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Neighbors of each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` isolated vertices
    pub fn new(vertices: usize) -> Self {
        UndirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::new(vertices);
        for &(u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Returns the neighbor list of a vertex in insertion order
    pub fn neighbor_slice(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges incident to a vertex
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbor_slice(vertex).len()
    }

    /// Iterates every undirected edge once as `(lower, higher, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |(v, _)| u < *v)
                .map(move |&(v, weight)| (u, v, weight))
        })
    }

    /// Returns true if every vertex can be reached from vertex 0
    pub fn is_connected(&self) -> bool {
        let n = self.adjacency.len();
        if n == 0 {
            return true;
        }

        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;

        while let Some(u) = queue.pop_front() {
            for &(v, _) in &self.adjacency[u] {
                if !seen[v] {
                    seen[v] = true;
                    reached += 1;
                    queue.push_back(v);
                }
            }
        }

        reached == n
    }

    /// Rewrites the weight of every undirected edge exactly once.
    ///
    /// Edges are visited from their lower endpoint, vertices ascending and
    /// neighbor lists in order; `weigh(u, v)` supplies the new weight, which
    /// is written to both directions.
    pub(crate) fn reweigh_edges<F>(&mut self, mut weigh: F)
    where
        F: FnMut(usize, usize) -> W,
    {
        for u in 0..self.adjacency.len() {
            for index in 0..self.adjacency[u].len() {
                let v = self.adjacency[u][index].0;
                if v <= u {
                    continue;
                }

                let weight = weigh(u, v);
                self.adjacency[u][index].1 = weight;
                if let Some(reverse) = self.adjacency[v].iter_mut().find(|(n, _)| *n == u) {
                    reverse.1 = weight;
                }
            }
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbor_slice(vertex).iter().copied())
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbor_slice(from).iter().any(|(v, _)| *v == to)
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbor_slice(from)
            .iter()
            .find(|(v, _)| *v == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    // Parallel edges are not detected here; generators keep their own table.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Err(Error::SelfLoop(from));
        }

        self.adjacency[from].push((to, weight));
        self.adjacency[to].push((from, weight));
        self.edge_count += 1;
        Ok(())
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let forward = self.adjacency[from]
            .iter()
            .position(|(v, _)| *v == to)
            .ok_or(Error::EdgeNotFound(from, to))?;
        let backward = self.adjacency[to]
            .iter()
            .position(|(v, _)| *v == from)
            .ok_or(Error::EdgeNotFound(to, from))?;

        self.adjacency[from][forward].1 = weight;
        self.adjacency[to][backward].1 = weight;
        Ok(())
    }
}

impl<W> fmt::Display for UndirectedGraph<W>
where
    W: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, list) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {} ->", u)?;
            for (v, weight) in list {
                write!(f, " ({}, {})", v, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
