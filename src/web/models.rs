use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::SearchStats;
use crate::graph::{Graph, UndirectedGraph};

/// Weight type used by every graph the web API generates
pub type WebWeight = u64;

/// One undirected edge, listed once with `source < target`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: WebWeight,
}

/// Represents a complete graph for API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertex_count: usize,
    pub edges: Vec<WebEdge>,
}

impl From<&UndirectedGraph<WebWeight>> for WebGraph {
    fn from(graph: &UndirectedGraph<WebWeight>) -> Self {
        WebGraph {
            vertex_count: graph.vertex_count(),
            edges: graph
                .edges()
                .map(|(source, target, weight)| WebEdge { source, target, weight })
                .collect(),
        }
    }
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub vertex_count: usize,
    pub edge_limit: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_min_weight")]
    pub min_weight: WebWeight,
    #[serde(default = "default_max_weight")]
    pub max_weight: WebWeight,
    #[serde(default)]
    pub clamp_edge_limit: bool,
}

fn default_seed() -> u64 { 1051962 }
fn default_min_weight() -> WebWeight { 1 }
fn default_max_weight() -> WebWeight { 50 }

/// Parameters for a shortest path query
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub source: usize,
    /// Also return the vertex sequence to every reachable vertex
    #[serde(default)]
    pub include_paths: bool,
}

/// Response containing shortest path results
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub source: usize,
    pub execution_time_ms: f64,
    pub reachable: usize,
    /// `null` marks an unreachable vertex
    pub distances: Vec<Option<WebWeight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<HashMap<usize, Vec<usize>>>,
    pub metrics: SearchMetrics,
}

/// Counters collected during the search
#[derive(Debug, Clone, Serialize)]
pub struct SearchMetrics {
    pub heap_pushes: usize,
    pub heap_pops: usize,
    pub stale_entries: usize,
    pub relaxations: usize,
}

impl From<SearchStats> for SearchMetrics {
    fn from(stats: SearchStats) -> Self {
        SearchMetrics {
            heap_pushes: stats.heap_pushes,
            heap_pops: stats.heap_pops,
            stale_entries: stats.stale_entries,
            relaxations: stats.relaxations,
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding one generated graph and its latest query
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<UndirectedGraph<WebWeight>>,
    pub seed: u64,
    pub last_result: Option<ShortestPathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: UndirectedGraph<WebWeight>, seed: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            seed,
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            connected: self.graph.is_connected(),
            seed: self.seed,
            created_at: self.created_at,
            last_source: self.last_result.as_ref().map(|result| result.source),
        }
    }
}

/// Session metadata returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub connected: bool,
    pub seed: u64,
    pub created_at: DateTime<Utc>,
    pub last_source: Option<usize>,
}
