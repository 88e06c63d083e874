//! Root greeting and database connectivity probe.

use axum::extract::State;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /
pub async fn greeting() -> &'static str {
    "Hello World!"
}

/// Brings the schema into existence and reports which backend answered.
///
/// With `database.reset_on_probe` set, the schema is dropped and recreated
/// first, losing every stored row.
///
/// GET /dbConexion
pub async fn db_conexion(State(state): State<AppState>) -> Result<String, ApiError> {
    let kind = state.db.backend_kind()?;

    if state.config.database.reset_on_probe {
        state.db.reset_schema().await?;
    }
    state.db.ensure_schema().await?;

    info!(backend = %kind, "Database connectivity probe succeeded");
    Ok(format!(
        "Base de datos en memoria: {} ({})",
        kind.is_in_memory(),
        kind
    ))
}
