//! Tarea entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Priority, Tarea};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored columns of `"Tareas"`. The derived summary is not one of them.
pub const TAREA_COLUMNS: &str = r#""TareaId", "CategoriaId", "Titulo", "Descripcion", "PrioridadTareas", "FechaCreacion""#;

/// Database row mapping for the `"Tareas"` table.
#[derive(Debug, Clone, FromRow)]
pub struct TareaEntity {
    #[sqlx(rename = "TareaId")]
    pub id: Uuid,
    #[sqlx(rename = "CategoriaId")]
    pub categoria_id: Option<Uuid>,
    #[sqlx(rename = "Titulo")]
    pub title: String,
    #[sqlx(rename = "Descripcion")]
    pub description: Option<String>,
    #[sqlx(rename = "PrioridadTareas")]
    pub priority: Option<i16>,
    #[sqlx(rename = "FechaCreacion")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl From<TareaEntity> for Tarea {
    fn from(entity: TareaEntity) -> Self {
        Tarea::new(
            entity.id,
            entity.categoria_id,
            entity.title,
            entity.description,
            entity.priority.and_then(Priority::from_i16),
            entity.creation_date,
        )
    }
}
