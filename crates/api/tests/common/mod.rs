#![allow(dead_code)]

use assetdesk_api::config::ServerConfig;
use assetdesk_api::router::build_app_router;
use assetdesk_api::state::AppState;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same builder as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool);
    build_app_router(state, &config)
}

/// Send a request built by the caller, for headers or bodies the JSON
/// helpers cannot express.
pub async fn send_raw(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status code and return the parsed body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// Count rows in `table` for an asset id.
pub async fn count_for_asset(pool: &PgPool, table: &str, assetid: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE assetid = $1"))
        .bind(assetid)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

/// Insert one maintenance and one in/out row for an existing asset.
pub async fn seed_dependents(pool: &PgPool, assetid: &str) {
    sqlx::query("INSERT INTO maintenance_records (assetid, issue) VALUES ($1, 'Fan noise')")
        .bind(assetid)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO in_out_records (assetid, userid) VALUES ($1, 'U1')")
        .bind(assetid)
        .execute(pool)
        .await
        .unwrap();
}
