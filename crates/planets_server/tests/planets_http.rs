//! HTTP-level tests for the planets router.
//!
//! Run against the in-memory store, so no database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use planets_core::{
    InMemoryPlanetStore, Planet, PlanetError, PlanetId, PlanetService, PlanetServiceImpl,
};
use planets_server::router::build_router;
use serde_json::{json, Value};
use tower::ServiceExt;

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> axum::Router {
    let service: Arc<dyn PlanetService> =
        Arc::new(PlanetServiceImpl::new(Arc::new(InMemoryPlanetStore::new())));
    build_router(service)
}

async fn seeded_app() -> axum::Router {
    let app = build_test_app();
    for body in [
        json!({ "name": "Tatooine", "climate": "arid", "terrain": "desert" }),
        json!({ "name": "Alderaan", "climate": "temperate", "terrain": "grassl" }),
        json!({ "name": "Yavin IV", "climate": "temperate", "terrain": "desert" }),
    ] {
        let resp = send(&app, post_json("/planets", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    app
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &axum::Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.unwrap()
}

// ── Helper to read response body ───────────────────────────────

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let resp = send(&build_test_app(), get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_create_with_valid_data() {
    let app = build_test_app();
    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "name": "Tatooine", "climate": "arid", "terrain": "desert" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({ "id": 1, "name": "Tatooine", "climate": "arid", "terrain": "desert" })
    );
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = build_test_app();
    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "id": 77, "name": "Hoth", "climate": "frozen", "terrain": "tundra" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], json!(1));
}

#[tokio::test]
async fn test_create_with_invalid_data() {
    let app = build_test_app();

    let resp = send(&app, post_json("/planets", &json!({}))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "name": "", "climate": "", "terrain": "" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["violations"].as_array().unwrap().len(), 3);
    assert_eq!(body["violations"][0]["field"], json!("name"));
}

#[tokio::test]
async fn test_create_with_null_field() {
    let app = build_test_app();
    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "name": null, "climate": "arid", "terrain": "desert" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_with_existing_name() {
    let app = seeded_app().await;
    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "name": "Tatooine", "climate": "arid", "terrain": "desert" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let app = build_test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/planets")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    assert_eq!(send(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_json_content_type() {
    let app = build_test_app();
    let body = json!({ "name": "Tatooine", "climate": "arid", "terrain": "desert" });
    let req = Request::builder()
        .method("POST")
        .uri("/planets")
        .header("content-type", "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap();
    assert_eq!(
        send(&app, req).await.status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );

    let req = Request::builder()
        .method("POST")
        .uri("/planets")
        .body(Body::from(body.to_string()))
        .unwrap();
    assert_eq!(
        send(&app, req).await.status(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );
}

#[tokio::test]
async fn test_create_with_nul_character_is_unprocessable() {
    let app = build_test_app();
    let resp = send(
        &app,
        post_json(
            "/planets",
            &json!({ "name": "Ho\u{0}th", "climate": "frozen", "terrain": "tundra" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["violations"][0]["field"], json!("name"));
    assert_eq!(
        body["violations"][0]["message"],
        json!("must not contain NUL characters")
    );
}

#[tokio::test]
async fn test_get_by_existing_id() {
    let app = seeded_app().await;
    let resp = send(&app, get("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "id": 1, "name": "Tatooine", "climate": "arid", "terrain": "desert" })
    );
}

#[tokio::test]
async fn test_get_by_unexisting_id() {
    let resp = send(&build_test_app(), get("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_by_non_numeric_id() {
    let resp = send(&build_test_app(), get("/planets/abc")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_by_existing_name() {
    let app = seeded_app().await;
    let resp = send(&app, get("/planets/name/Yavin%20IV")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["id"], json!(3));
}

#[tokio::test]
async fn test_get_by_unexisting_name() {
    let app = seeded_app().await;
    let resp = send(&app, get("/planets/name/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filtered() {
    let app = seeded_app().await;

    let resp = send(&app, get("/planets")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);

    let resp = send(&app, get("/planets?terrain=desert&climate=arid")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{ "id": 1, "name": "Tatooine", "climate": "arid", "terrain": "desert" }])
    );

    let resp = send(&app, get("/planets?terrain=desert")).await;
    let names: Vec<_> = body_json(resp)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Tatooine", "Yavin IV"]);
}

#[tokio::test]
async fn test_list_empty_params_are_unfiltered() {
    let app = seeded_app().await;
    let resp = send(&app, get("/planets?terrain=&climate=")).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_no_planets() {
    let resp = send(&build_test_app(), get("/planets")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn test_remove_existing_id() {
    let app = seeded_app().await;
    let resp = send(&app, delete("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, get("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_unexisting_id() {
    let resp = send(&build_test_app(), delete("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "not found: planet 1" }));
}

// ── Internal failures ──────────────────────────────────────────

struct BrokenService;

#[async_trait]
impl PlanetService for BrokenService {
    async fn get(&self, _: PlanetId) -> Result<Option<Planet>, PlanetError> {
        Err(PlanetError::Internal(anyhow::anyhow!("password=hunter2 rejected")))
    }
    async fn create(&self, _: Planet) -> Result<Planet, PlanetError> {
        unreachable!()
    }
    async fn get_by_name(&self, _: &str) -> Result<Option<Planet>, PlanetError> {
        unreachable!()
    }
    async fn list(
        &self,
        _: Option<&str>,
        _: Option<&str>,
    ) -> Result<Vec<Planet>, PlanetError> {
        unreachable!()
    }
    async fn remove(&self, _: PlanetId) -> Result<(), PlanetError> {
        unreachable!()
    }
}

#[tokio::test]
async fn test_internal_error_is_500_without_detail() {
    let app = build_router(Arc::new(BrokenService));
    let resp = send(&app, get("/planets/1")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "internal server error" })
    );
}
