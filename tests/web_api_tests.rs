use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use undirected_sssp::web::{build_app, ServerConfig};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = build_app(&ServerConfig::default());
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_generate_then_query() {
    let app = build_app(&ServerConfig::default());

    let (status, session) = send(
        &app,
        "POST",
        "/api/graphs/generate",
        Some(json!({ "vertex_count": 30, "edge_limit": 60, "seed": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["vertex_count"], 30);
    assert_eq!(session["edge_count"], 60);
    assert_eq!(session["connected"], true);
    let id = session["id"].as_str().unwrap().to_string();

    let (status, graph) = send(&app, "GET", &format!("/api/graphs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let edges = graph["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 60);
    for edge in edges {
        let weight = edge["weight"].as_u64().unwrap();
        assert!((1..=50).contains(&weight));
        assert!(edge["source"].as_u64().unwrap() < edge["target"].as_u64().unwrap());
    }

    let (status, result) = send(
        &app,
        "POST",
        &format!("/api/shortest-paths/{}", id),
        Some(json!({ "source": 0, "include_paths": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reachable"], 30);
    assert_eq!(result["distances"][0], 0);
    assert_eq!(result["paths"]["0"], json!([0]));

    let (_, summary) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
    assert_eq!(summary["last_source"], 0);

    let (_, sessions) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(sessions.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unsatisfiable_edge_limit_is_bad_request() {
    let app = build_app(&ServerConfig::default());
    let (status, body) = send(
        &app,
        "POST",
        "/api/graphs/generate",
        Some(json!({ "vertex_count": 4, "edge_limit": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsatisfiable_edge_limit");
}

#[tokio::test]
async fn test_invalid_source_is_bad_request() {
    let app = build_app(&ServerConfig::default());
    let (_, session) = send(
        &app,
        "POST",
        "/api/graphs/generate",
        Some(json!({ "vertex_count": 5, "edge_limit": 4 })),
    )
    .await;
    let id = session["id"].as_str().unwrap();

    let (status, body) = send(&app, "POST", &format!("/api/shortest-paths/{}", id), Some(json!({ "source": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_vertex");
}

#[tokio::test]
async fn test_unknown_session() {
    let app = build_app(&ServerConfig::default());
    let uri = format!("/api/graphs/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session_not_found");
}

#[tokio::test]
async fn test_session_limit() {
    let app = build_app(&ServerConfig {
        max_sessions: 1,
        ..Default::default()
    });
    let request = json!({ "vertex_count": 3, "edge_limit": 2 });

    let (status, _) = send(&app, "POST", "/api/graphs/generate", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "POST", "/api/graphs/generate", Some(request)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "too_many_sessions");
}
