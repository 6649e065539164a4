use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{RandomGraphGenerator, RandomWeightAssigner, UndirectedGraph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Session store is unavailable".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/shortest-paths/:session_id", post(run_shortest_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Generate and weigh a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<SessionSummary>, ApiError> {
    if state.sessions()?.len() >= state.max_sessions {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "too_many_sessions",
            format!("Session limit of {} reached", state.max_sessions),
        ));
    }

    let seed = request.seed;
    let graph = tokio::task::spawn_blocking(move || build_weighted_graph(&request))
        .await
        .map_err(|err| api_error(StatusCode::INTERNAL_SERVER_ERROR, "generation_failed", err.to_string()))?
        .map_err(error_response)?;

    let session = Session::new(graph, seed);
    let summary = session.summary();
    info!(
        "Session {} created: {} vertices, {} edges",
        summary.id, summary.vertex_count, summary.edge_count
    );

    state.sessions()?.insert(session.id, session);

    Ok(Json(summary))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(WebGraph::from(session.graph.as_ref()))),
        None => Err(session_not_found()),
    }
}

/// Run Dijkstra from a source vertex on a session's graph
pub async fn run_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let graph = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => Arc::clone(&session.graph),
            None => return Err(session_not_found()),
        }
    };

    let response = tokio::task::spawn_blocking(move || search(&graph, &request))
        .await
        .map_err(|err| api_error(StatusCode::INTERNAL_SERVER_ERROR, "search_failed", err.to_string()))?
        .map_err(error_response)?;

    if let Some(session) = state.sessions()?.get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.sessions()?;
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let sessions = state.sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.summary())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn build_weighted_graph(request: &GraphGenerationRequest) -> crate::Result<UndirectedGraph<WebWeight>> {
    let assigner = RandomWeightAssigner::new(request.seed, request.min_weight, request.max_weight)?;
    let mut graph = RandomGraphGenerator::new(request.seed)
        .clamp_edge_limit(request.clamp_edge_limit)
        .generate(request.vertex_count, request.edge_limit)?;
    assigner.assign(&mut graph);
    Ok(graph)
}

fn search(graph: &UndirectedGraph<WebWeight>, request: &ShortestPathRequest) -> crate::Result<ShortestPathResponse> {
    let dijkstra = Dijkstra::new();

    let start_time = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, request.source)?;
    let execution_time = start_time.elapsed();

    let paths = request.include_paths.then(|| {
        (0..result.distances.len())
            .filter_map(|target| {
                <Dijkstra as ShortestPathAlgorithm<WebWeight, UndirectedGraph<WebWeight>>>::get_path(&dijkstra, &result, target)
                    .map(|path| (target, path))
            })
            .collect()
    });

    Ok(ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        reachable: result.reachable_count(),
        paths,
        metrics: result.stats.into(),
        distances: result.distances,
    })
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) | Error::SourceNotFound(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::UnsatisfiableEdgeLimit { .. } => (StatusCode::BAD_REQUEST, "unsatisfiable_edge_limit"),
        Error::InvalidWeightRange => (StatusCode::BAD_REQUEST, "invalid_weight_range"),
        Error::SelfLoop(_) | Error::EdgeNotFound(..) | Error::Config(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        Error::EmptyQueue => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    api_error(status, code, err.to_string())
}
