//! Integration tests for the Lectern REST API
//!
//! Drives the real router and the real upstream client against a
//! stub content API served on an ephemeral local port.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

use lectern::core::config::Config;
use lectern::core::services::Services;
use lectern::core::types::*;

/// Stub upstream behavior switches and captured request data
#[derive(Clone, Default)]
struct StubState {
    fail_bibles: bool,
    seen_api_key: Arc<Mutex<Option<String>>>,
}

async fn stub_bibles(State(state): State<StubState>, headers: HeaderMap) -> Response {
    *state.seen_api_key.lock().unwrap() = headers
        .get("api-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    if state.fail_bibles {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream down").into_response();
    }

    Json(json!({
        "data": [
            {
                "id": "kjv",
                "name": "King James Version",
                "abbreviation": "KJV",
                "language": {"id": "eng", "name": "English"}
            },
            {
                "id": "asv",
                "name": "American Standard Version",
                "abbreviation": "ASV",
                "language": {"id": "eng", "name": "English"}
            },
            {
                "id": "other",
                "name": "Other Translation",
                "abbreviation": "OT",
                "language": {"id": "xxx", "name": "Other"}
            }
        ]
    }))
    .into_response()
}

async fn stub_books(Path(_bible_id): Path<String>) -> Json<Value> {
    Json(json!({
        "data": [
            {"id": "GEN", "name": "Genesis", "abbreviation": "Gen"},
            {"id": "ECC", "name": "Ecclesiastes", "abbreviation": "Ecc"}
        ]
    }))
}

async fn stub_chapters(Path((_bible_id, book_id)): Path<(String, String)>) -> Response {
    if book_id == "ECC" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "chapter store down").into_response();
    }

    Json(json!({
        "data": [
            {"id": "GEN.intro", "number": "intro"},
            {"id": "GEN.1", "number": "1"},
            {"id": "GEN.2", "number": "2"}
        ]
    }))
    .into_response()
}

async fn stub_verses(Path((bible_id, chapter_id)): Path<(String, String)>) -> Response {
    match bible_id.as_str() {
        "kjv" => Json(json!({
            "data": [
                {
                    "id": format!("{chapter_id}.1"),
                    "reference": "Genesis 1:1",
                    "text": "<p>In the  beginning</p>"
                },
                {
                    "id": format!("{chapter_id}.2"),
                    "reference": "Genesis 1:2",
                    "text": "And the earth"
                }
            ]
        }))
        .into_response(),
        "asv" => Json(json!({
            "data": [
                {
                    "id": format!("{chapter_id}.2"),
                    "reference": "Genesis 1:2",
                    "text": "Now the earth"
                },
                {
                    "id": format!("{chapter_id}.3"),
                    "reference": "Genesis 1:3",
                    "text": "And God said"
                }
            ]
        }))
        .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "verse store down").into_response(),
        _ => Json(json!({"data": []})).into_response(),
    }
}

/// Start the stub upstream on an ephemeral port, returning its base URL
async fn spawn_stub(state: StubState) -> String {
    let stub = Router::new()
        .route("/v1/bibles", get(stub_bibles))
        .route("/v1/bibles/:bible_id/books", get(stub_books))
        .route(
            "/v1/bibles/:bible_id/books/:book_id/chapters",
            get(stub_chapters),
        )
        .route(
            "/v1/bibles/:bible_id/chapters/:chapter_id/verses",
            get(stub_verses),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    format!("http://{addr}/v1")
}

/// Create a test application wired to the given stub upstream
fn create_test_app(base_url: &str) -> Router {
    let mut config = Config::default();
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_key = "test-key".to_string();
    config.preferences.languages = vec!["eng".to_string()];

    let services = Arc::new(Services::new(config).unwrap());
    lectern::http::app(services)
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get_request(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "healthy");
    assert!(health.message.contains("lectern"));
}

#[tokio::test]
async fn test_versions_filtered_and_sorted() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let response = app.oneshot(get_request("/api/versions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    let versions: Vec<Version> = serde_json::from_slice(&body).unwrap();

    // "other" (xxx language) filtered out; remaining two sorted by name.
    let ids: Vec<&str> = versions.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["asv", "kjv"]);
    assert_eq!(versions[0].language, "English");
}

#[tokio::test]
async fn test_versions_upstream_failure_returns_500() {
    let base_url = spawn_stub(StubState {
        fail_bibles: true,
        ..StubState::default()
    })
    .await;
    let app = create_test_app(&base_url);

    let response = app.oneshot(get_request("/api/versions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("503"));
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_api_key_header_forwarded_upstream() {
    let state = StubState::default();
    let seen = state.seen_api_key.clone();
    let base_url = spawn_stub(state).await;
    let app = create_test_app(&base_url);

    let response = app.oneshot(get_request("/api/versions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(seen.lock().unwrap().as_deref(), Some("test-key"));
}

#[tokio::test]
async fn test_books_with_chapter_failure_isolation() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let response = app
        .oneshot(get_request("/api/versions/kjv/books"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    let books: Vec<Book> = serde_json::from_slice(&body).unwrap();

    assert_eq!(books.len(), 2);

    // GEN keeps only its numeric chapters, in upstream order.
    let numbers: Vec<&str> = books[0].chapters.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(books[0].id, "GEN");
    assert_eq!(numbers, vec!["1", "2"]);

    // ECC's chapter listing failed upstream but the book survives.
    assert_eq!(books[1].id, "ECC");
    assert!(books[1].chapters.is_empty());
}

#[tokio::test]
async fn test_compare_merges_versions() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let request = post_json(
        "/api/compare",
        json!({"version_ids": ["kjv", "asv"], "book_id": "GEN", "chapter": 1}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    let comparison: Comparison = serde_json::from_slice(&body).unwrap();

    assert_eq!(comparison.book_id, "GEN");
    assert_eq!(comparison.book_name, "Genesis");
    assert_eq!(comparison.chapter, 1);

    let numbers: Vec<&str> = comparison.verses.iter().map(|v| v.verse.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);

    // Markup stripped and whitespace collapsed.
    assert_eq!(comparison.verses[0].texts["kjv"], "In the beginning");
    assert_eq!(comparison.verses[0].texts["asv"], VERSE_PLACEHOLDER);
    assert_eq!(comparison.verses[2].texts["kjv"], VERSE_PLACEHOLDER);
    assert_eq!(comparison.verses[2].texts["asv"], "And God said");
}

#[tokio::test]
async fn test_compare_defaults_chapter_to_one() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let request = post_json(
        "/api/compare",
        json!({"version_ids": ["kjv"], "book_id": "GEN"}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    let comparison: Comparison = serde_json::from_slice(&body).unwrap();
    assert_eq!(comparison.chapter, 1);
    assert_eq!(comparison.verses.len(), 2);
}

#[tokio::test]
async fn test_compare_missing_parameters_returns_400() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let response = app
        .clone()
        .oneshot(post_json("/api/compare", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/api/compare",
            json!({"version_ids": [], "book_id": "GEN"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_compare_broken_version_is_isolated() {
    let base_url = spawn_stub(StubState::default()).await;
    let app = create_test_app(&base_url);

    let request = post_json(
        "/api/compare",
        json!({"version_ids": ["kjv", "broken"], "book_id": "GEN", "chapter": 1}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64_000)
        .await
        .unwrap();
    let comparison: Comparison = serde_json::from_slice(&body).unwrap();

    assert_eq!(comparison.verses.len(), 2);
    for row in &comparison.verses {
        assert_eq!(row.texts["broken"], VERSE_PLACEHOLDER);
        assert!(row.texts.contains_key("kjv"));
    }
}
