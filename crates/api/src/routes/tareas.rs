//! Task endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{NewTarea, Tarea, UpdateTarea};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for task listing.
#[derive(Debug, Serialize)]
pub struct ListTareasResponse {
    pub tareas: Vec<Tarea>,
    pub count: usize,
}

/// POST /api/v1/tareas
pub async fn create_tarea(
    State(state): State<AppState>,
    Json(request): Json<NewTarea>,
) -> Result<(StatusCode, Json<Tarea>), ApiError> {
    let tarea = state.db.create_tarea(request).await?;

    info!(
        tarea_id = %tarea.id,
        categoria_id = ?tarea.categoria_id,
        "Created tarea"
    );

    Ok((StatusCode::CREATED, Json(tarea)))
}

/// GET /api/v1/tareas
pub async fn list_tareas(
    State(state): State<AppState>,
) -> Result<Json<ListTareasResponse>, ApiError> {
    let tareas = state.db.list_tareas().await?;
    let count = tareas.len();

    Ok(Json(ListTareasResponse { tareas, count }))
}

/// GET /api/v1/tareas/:tarea_id
pub async fn get_tarea(
    State(state): State<AppState>,
    Path(tarea_id): Path<Uuid>,
) -> Result<Json<Tarea>, ApiError> {
    Ok(Json(state.db.get_tarea(tarea_id).await?))
}

/// PUT /api/v1/tareas/:tarea_id
pub async fn update_tarea(
    State(state): State<AppState>,
    Path(tarea_id): Path<Uuid>,
    Json(request): Json<UpdateTarea>,
) -> Result<Json<Tarea>, ApiError> {
    let tarea = state.db.update_tarea(tarea_id, request).await?;

    info!(tarea_id = %tarea_id, "Updated tarea");

    Ok(Json(tarea))
}

/// DELETE /api/v1/tareas/:tarea_id
pub async fn delete_tarea(
    State(state): State<AppState>,
    Path(tarea_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_tarea(tarea_id).await?;

    info!(tarea_id = %tarea_id, "Deleted tarea");

    Ok(StatusCode::NO_CONTENT)
}
