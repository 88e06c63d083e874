//! Category endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Categoria, NewCategoria, Tarea, UpdateCategoria};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for category listing.
#[derive(Debug, Serialize)]
pub struct ListCategoriasResponse {
    pub categorias: Vec<Categoria>,
    pub count: usize,
}

/// Response for the tasks owned by one category.
#[derive(Debug, Serialize)]
pub struct CategoriaTareasResponse {
    pub categoria_id: Uuid,
    pub tareas: Vec<Tarea>,
    pub count: usize,
}

/// POST /api/v1/categorias
pub async fn create_categoria(
    State(state): State<AppState>,
    Json(request): Json<NewCategoria>,
) -> Result<(StatusCode, Json<Categoria>), ApiError> {
    let categoria = state.db.create_categoria(request).await?;

    info!(categoria_id = %categoria.id, "Created categoria");

    Ok((StatusCode::CREATED, Json(categoria)))
}

/// GET /api/v1/categorias
pub async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<ListCategoriasResponse>, ApiError> {
    let categorias = state.db.list_categorias().await?;
    let count = categorias.len();

    Ok(Json(ListCategoriasResponse { categorias, count }))
}

/// GET /api/v1/categorias/:categoria_id
pub async fn get_categoria(
    State(state): State<AppState>,
    Path(categoria_id): Path<Uuid>,
) -> Result<Json<Categoria>, ApiError> {
    Ok(Json(state.db.get_categoria(categoria_id).await?))
}

/// PUT /api/v1/categorias/:categoria_id
pub async fn update_categoria(
    State(state): State<AppState>,
    Path(categoria_id): Path<Uuid>,
    Json(request): Json<UpdateCategoria>,
) -> Result<Json<Categoria>, ApiError> {
    let categoria = state.db.update_categoria(categoria_id, request).await?;

    info!(categoria_id = %categoria_id, "Updated categoria");

    Ok(Json(categoria))
}

/// Deletes the category and every task that belongs to it.
///
/// DELETE /api/v1/categorias/:categoria_id
pub async fn delete_categoria(
    State(state): State<AppState>,
    Path(categoria_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_categoria(categoria_id).await?;

    info!(categoria_id = %categoria_id, "Deleted categoria");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/categorias/:categoria_id/tareas
pub async fn list_categoria_tareas(
    State(state): State<AppState>,
    Path(categoria_id): Path<Uuid>,
) -> Result<Json<CategoriaTareasResponse>, ApiError> {
    let tareas = state.db.list_tareas_by_categoria(categoria_id).await?;
    let count = tareas.len();

    Ok(Json(CategoriaTareasResponse {
        categoria_id,
        tareas,
        count,
    }))
}
