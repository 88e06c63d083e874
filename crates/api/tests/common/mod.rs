//! Common test utilities for integration tests.
//!
//! Most tests run against the in-memory backend. Tests that need PostgreSQL
//! call `test_database_url` and return early when `TEST_DATABASE_URL` is unset.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::models::SchemaVersion;
use persistence::{BackendSetting, Database, DatabaseConfig};
use tareas_api::{
    app::create_app,
    config::{Config, LoggingConfig, SecurityConfig, ServerConfig},
};
use tower::ServiceExt;

/// Connection string of the PostgreSQL test database, if one is available.
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.is_empty())
}

/// Test configuration bound to the given database settings.
pub fn test_config(database: DatabaseConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database,
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
    }
}

/// Router over a fresh in-memory store.
pub fn memory_app() -> Router {
    memory_app_with(DatabaseConfig::in_memory())
}

/// Router over a fresh in-memory store built from `database`.
pub fn memory_app_with(database: DatabaseConfig) -> Router {
    assert_eq!(database.backend, BackendSetting::Memory);
    let db = Database::in_memory(database.schema_version);
    create_app(test_config(database), db)
}

/// Router over a fresh in-memory store using an explicit schema version.
pub fn memory_app_with_version(version: SchemaVersion) -> Router {
    memory_app_with(DatabaseConfig {
        schema_version: version,
        ..DatabaseConfig::in_memory()
    })
}

/// Router with no database bound.
pub fn unconfigured_app() -> Router {
    let database = DatabaseConfig {
        backend: BackendSetting::None,
        ..Default::default()
    };
    create_app(test_config(database), Database::unconfigured())
}

/// Router whose database handle is built by `Database::from_config`.
pub fn app_from_config(database: DatabaseConfig) -> Router {
    let db = Database::from_config(&database).expect("Failed to bind database");
    create_app(test_config(database), db)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a request without a body.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    empty_request(Method::GET, uri)
}

/// Parse a response body as JSON, or `Null` if it is not JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Read a response body as text.
pub async fn response_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Call `GET /dbConexion` and assert it succeeded.
pub async fn probe(app: &Router) {
    let response = app.clone().oneshot(get_request("/dbConexion")).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
}

/// Create a category through the API and return its JSON.
pub async fn create_categoria(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/categorias", body))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}

/// Create a task through the API and return its JSON.
pub async fn create_tarea(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/tareas", body))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}
