//! Integration tests for category endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_categoria, create_tarea, empty_request, get_request, json_request, memory_app,
    memory_app_with_version, parse_response_body, probe,
};
use domain::models::SchemaVersion;
use fake::{faker::lorem::en::Word, Fake};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_categoria_success() {
    let app = memory_app();
    probe(&app).await;

    let body = create_categoria(
        &app,
        json!({ "name": "Hogar", "description": "Tareas de casa", "weight": 3 }),
    )
    .await;

    assert!(body["id"].is_string());
    assert_eq!(body["name"], "Hogar");
    assert_eq!(body["description"], "Tareas de casa");
    assert_eq!(body["weight"], 3);
}

#[tokio::test]
async fn test_create_categoria_name_too_long() {
    let app = memory_app();
    probe(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/categorias",
            json!({ "name": "x".repeat(151) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");

    let response = app
        .oneshot(get_request("/api/v1/categorias"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_create_categoria_name_at_limit() {
    let app = memory_app();
    probe(&app).await;

    let body = create_categoria(&app, json!({ "name": "x".repeat(150) })).await;

    assert_eq!(body["name"].as_str().unwrap().chars().count(), 150);
}

#[tokio::test]
async fn test_create_categoria_blank_name() {
    let app = memory_app();
    probe(&app).await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/categorias",
            json!({ "name": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weight_not_stored_under_v1() {
    let app = memory_app_with_version(SchemaVersion::V1);
    probe(&app).await;

    let created = create_categoria(&app, json!({ "name": "Ocio", "weight": 9 })).await;

    let uri = format!("/api/v1/categorias/{}", created["id"].as_str().unwrap());
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    let body = parse_response_body(response).await;
    assert!(body["weight"].is_null());
}

#[tokio::test]
async fn test_list_categorias() {
    let app = memory_app();
    probe(&app).await;

    for _ in 0..3 {
        let name: String = Word().fake();
        create_categoria(&app, json!({ "name": name })).await;
    }

    let response = app
        .oneshot(get_request("/api/v1/categorias"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["categorias"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_categoria_not_found() {
    let app = memory_app();
    probe(&app).await;

    let uri = format!("/api/v1/categorias/{}", uuid::Uuid::new_v4());
    let response = app.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_categoria_invalid_id() {
    let app = memory_app();
    probe(&app).await;

    let response = app
        .oneshot(get_request("/api/v1/categorias/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_categoria_keeps_id() {
    let app = memory_app();
    probe(&app).await;
    let created = create_categoria(&app, json!({ "name": "Antes" })).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/categorias/{}", id),
            json!({ "name": "Despues", "id": uuid::Uuid::new_v4() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Despues");
}

#[tokio::test]
async fn test_update_categoria_rejects_long_name() {
    let app = memory_app();
    probe(&app).await;
    let created = create_categoria(&app, json!({ "name": "Corta" })).await;
    let uri = format!("/api/v1/categorias/{}", created["id"].as_str().unwrap());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &uri,
            json!({ "name": "y".repeat(151) }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_request(&uri)).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["name"], "Corta");
}

#[tokio::test]
async fn test_delete_categoria_cascades_to_tareas() {
    let app = memory_app();
    probe(&app).await;
    let categoria = create_categoria(&app, json!({ "name": "Temporal" })).await;
    let categoria_id = categoria["id"].as_str().unwrap();
    let tarea = create_tarea(
        &app,
        json!({ "title": "Hija", "categoria_id": categoria_id }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/v1/categorias/{}", categoria_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/tareas/{}",
            tarea["id"].as_str().unwrap()
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/v1/categorias/{}", categoria_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_categoria_tareas() {
    let app = memory_app();
    probe(&app).await;
    let casa = create_categoria(&app, json!({ "name": "Casa" })).await;
    let trabajo = create_categoria(&app, json!({ "name": "Trabajo" })).await;
    let casa_id = casa["id"].as_str().unwrap();

    create_tarea(&app, json!({ "title": "Barrer", "categoria_id": casa_id })).await;
    create_tarea(&app, json!({ "title": "Cocinar", "categoria_id": casa_id })).await;
    create_tarea(
        &app,
        json!({ "title": "Informe", "categoria_id": trabajo["id"] }),
    )
    .await;
    create_tarea(&app, json!({ "title": "Suelta" })).await;

    let response = app
        .oneshot(get_request(&format!("/api/v1/categorias/{}/tareas", casa_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["categoria_id"], casa_id);
    for tarea in body["tareas"].as_array().unwrap() {
        assert_eq!(tarea["categoria_id"], casa_id);
    }
}

#[tokio::test]
async fn test_list_tareas_of_missing_categoria() {
    let app = memory_app();
    probe(&app).await;

    let uri = format!("/api/v1/categorias/{}/tareas", uuid::Uuid::new_v4());
    let response = app.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
