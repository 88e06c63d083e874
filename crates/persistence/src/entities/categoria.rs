//! Categoria entity (database row mapping).

use domain::models::{Categoria, SchemaVersion};
use sqlx::FromRow;
use uuid::Uuid;

/// Selectable columns of `"Categorias"` in schema version `v1`.
pub const CATEGORIA_COLUMNS_V1: &str = r#""CategoriaId", "Nombre", "Descripcion""#;

/// Selectable columns of `"Categorias"` in schema version `v2`.
pub const CATEGORIA_COLUMNS_V2: &str = r#""CategoriaId", "Nombre", "Descripcion", "Peso""#;

/// Returns the stored column list for the given schema version.
pub fn categoria_columns(version: SchemaVersion) -> &'static str {
    if version.stores_weight() {
        CATEGORIA_COLUMNS_V2
    } else {
        CATEGORIA_COLUMNS_V1
    }
}

/// Database row mapping for the `"Categorias"` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoriaEntity {
    #[sqlx(rename = "CategoriaId")]
    pub id: Uuid,
    #[sqlx(rename = "Nombre")]
    pub name: String,
    #[sqlx(rename = "Descripcion")]
    pub description: Option<String>,
    /// Absent from `v1` result sets.
    #[sqlx(rename = "Peso", default)]
    pub weight: Option<i32>,
}

impl From<CategoriaEntity> for Categoria {
    fn from(entity: CategoriaEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            weight: entity.weight,
        }
    }
}
