//! Integration tests for the roster API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use duckrace_api::router::{build_router, build_router_with_static};
use duckrace_api::state::AppState;
use duckrace_core::{RandomIdSource, RosterStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let store = RosterStore::with_id_source(Box::new(RandomIdSource::seeded(7)));
    Arc::new(AppState::with_store(store))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn post(path: &str) -> Request<Body> {
    Request::post(path).body(Body::empty()).unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::delete(path).body(Body::empty()).unwrap()
}

fn patch(path: &str, body: &Value) -> Request<Body> {
    Request::patch(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ids(ducks: &Value) -> Vec<u64> {
    ducks
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_u64().unwrap())
        .collect()
}

fn lanes(ducks: &Value) -> Vec<u64> {
    ducks
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["lane"].as_u64().unwrap())
        .collect()
}

// =========================================================================
// Status page
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

// =========================================================================
// Ducks
// =========================================================================

#[tokio::test]
async fn test_list_seed_ducks() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/api/ducks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1001, 1002, 1003, 1004]);
    assert_eq!(lanes(&json), vec![0, 1, 2, 3]);
    assert_eq!(json[0]["name"], "Vịt Vàng");
    assert_eq!(json[0]["color"], "#FFD700");
    assert_eq!(json[0]["position"], 0.0);
    assert_eq!(json[0]["isWinner"], false);
}

#[tokio::test]
async fn test_add_duck_returns_created() {
    let router = build_router(make_test_state());

    let (status, duck) = send(&router, post("/api/ducks")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(duck["lane"], 4);
    assert_eq!(duck["name"], "Vịt 5");
    assert_eq!(duck["color"], "hsl(100, 70%, 60%)");
    assert_eq!(duck["isWinner"], false);

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    assert_eq!(ducks.as_array().unwrap().len(), 5);
    assert_eq!(ducks[4]["id"], duck["id"]);
}

#[tokio::test]
async fn test_add_duck_at_capacity_is_rejected() {
    let router = build_router(make_test_state());

    for _ in 4..100 {
        let (status, _) = send(&router, post("/api/ducks")).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&router, post("/api/ducks")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("100"));

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    assert_eq!(ducks.as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_add_then_remove_renumbers_lanes() {
    let router = build_router(make_test_state());

    let (_, added) = send(&router, post("/api/ducks")).await;
    assert_eq!(added["lane"], 4);

    let (status, json) = send(&router, delete("/api/ducks/1002")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    assert_eq!(
        ids(&ducks),
        vec![1001, 1003, 1004, added["id"].as_u64().unwrap()]
    );
    assert_eq!(lanes(&ducks), vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_remove_unknown_duck() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, delete("/api/ducks/9")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_remove_invalid_id() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, delete("/api/ducks/not-a-number")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("invalid duck id"));
}

#[tokio::test]
async fn test_last_duck_cannot_be_removed() {
    let router = build_router(make_test_state());

    for id in [1001, 1002, 1003] {
        let (status, _) = send(&router, delete(&format!("/api/ducks/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = send(&router, delete("/api/ducks/1004")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("last duck"));

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    assert_eq!(ids(&ducks), vec![1004]);
    assert_eq!(lanes(&ducks), vec![0]);
}

#[tokio::test]
async fn test_update_duck_merges_fields() {
    let router = build_router(make_test_state());

    let body = json!({"name": "Donald", "position": 88.5, "isWinner": true, "trail": "sparkle"});
    let (status, json) = send(&router, patch("/api/ducks/1003", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    let duck = &ducks[2];
    assert_eq!(duck["id"], 1003);
    assert_eq!(duck["name"], "Donald");
    assert_eq!(duck["position"], 88.5);
    assert_eq!(duck["isWinner"], true);
    assert_eq!(duck["trail"], "sparkle");
    assert_eq!(duck["lane"], 2);
}

#[tokio::test]
async fn test_update_unknown_duck() {
    let router = build_router(make_test_state());

    let (status, _) = send(&router, patch("/api/ducks/77", &json!({"name": "x"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_cannot_touch_id_or_lane() {
    let router = build_router(make_test_state());

    let (status, json) = send(
        &router,
        patch("/api/ducks/1001", &json!({"name": "Renamed", "lane": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("lane"));

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    assert_eq!(ducks[0]["name"], "Vịt Vàng");
    assert_eq!(lanes(&ducks), vec![0, 1, 2, 3]);
}

// =========================================================================
// Settings
// =========================================================================

#[tokio::test]
async fn test_default_settings() {
    let router = build_router(make_test_state());

    let (status, json) = send(&router, get("/api/settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"raceDuration": 10, "predeterminedWinnerId": null}));
}

#[tokio::test]
async fn test_race_duration_is_clamped() {
    let router = build_router(make_test_state());

    for (requested, stored) in [(json!(0), 1), (json!(1000), 60), (json!(30), 30), (json!(12.7), 12)] {
        let (status, json) = send(
            &router,
            patch("/api/settings", &json!({"raceDuration": requested})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["raceDuration"], stored);
    }
}

#[tokio::test]
async fn test_non_numeric_duration_is_rejected() {
    let router = build_router(make_test_state());

    let (status, _) = send(
        &router,
        patch("/api/settings", &json!({"raceDuration": "long", "predeterminedWinnerId": 1001})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, settings) = send(&router, get("/api/settings")).await;
    assert_eq!(settings["raceDuration"], 10);
    assert!(settings["predeterminedWinnerId"].is_null());
}

#[tokio::test]
async fn test_set_and_clear_winner() {
    let router = build_router(make_test_state());

    let (_, json) = send(
        &router,
        patch("/api/settings", &json!({"predeterminedWinnerId": 1002})),
    )
    .await;
    assert_eq!(json["predeterminedWinnerId"], 1002);

    let (_, json) = send(
        &router,
        patch("/api/settings", &json!({"predeterminedWinnerId": "1003"})),
    )
    .await;
    assert_eq!(json["predeterminedWinnerId"], 1003);

    let (_, json) = send(
        &router,
        patch("/api/settings", &json!({"predeterminedWinnerId": "none"})),
    )
    .await;
    assert!(json["predeterminedWinnerId"].is_null());
}

#[tokio::test]
async fn test_unknown_winner_keeps_previous() {
    let router = build_router(make_test_state());

    send(&router, patch("/api/settings", &json!({"predeterminedWinnerId": 1004}))).await;

    let (status, json) = send(
        &router,
        patch("/api/settings", &json!({"predeterminedWinnerId": 5555})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["predeterminedWinnerId"], 1004);
}

#[tokio::test]
async fn test_absent_fields_are_ignored() {
    let router = build_router(make_test_state());

    send(&router, patch("/api/settings", &json!({"raceDuration": 25}))).await;
    let (status, json) = send(&router, patch("/api/settings", &json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["raceDuration"], 25);
}

#[tokio::test]
async fn test_null_or_non_object_settings_body_changes_nothing() {
    let router = build_router(make_test_state());

    send(&router, patch("/api/settings", &json!({"raceDuration": 42}))).await;

    for body in [Value::Null, json!([1, 2]), json!("raceDuration")] {
        let (status, json) = send(&router, patch("/api/settings", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"raceDuration": 42, "predeterminedWinnerId": null}));
    }
}

#[tokio::test]
async fn test_removing_winner_clears_setting() {
    let router = build_router(make_test_state());

    send(&router, patch("/api/settings", &json!({"predeterminedWinnerId": 1002}))).await;
    send(&router, delete("/api/ducks/1002")).await;

    let (_, json) = send(&router, get("/api/settings")).await;
    assert!(json["predeterminedWinnerId"].is_null());
}

// =========================================================================
// Concurrency, CORS, static files
// =========================================================================

#[tokio::test]
async fn test_concurrent_adds_keep_roster_consistent() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let mut handles = Vec::new();
    for _ in 0..40 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            router.oneshot(post("/api/ducks")).await.unwrap().status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let (_, ducks) = send(&router, get("/api/ducks")).await;
    let mut all_ids = ids(&ducks);
    assert_eq!(all_ids.len(), 44);
    assert_eq!(lanes(&ducks), (0..44).collect::<Vec<u64>>());
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), 44);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let router = build_router(make_test_state());

    let request = Request::get("/api/ducks")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_static_files_served_when_configured() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/static");
    let router = build_router_with_static(make_test_state(), &dir);

    let response = router
        .clone()
        .oneshot(get("/static/hello.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), b"quack\n");

    let (status, _) = send(&router, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_static_files_absent_by_default() {
    let router = build_router(make_test_state());

    let response = router.oneshot(get("/static/hello.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
