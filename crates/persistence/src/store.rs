//! Backend contract shared by the PostgreSQL and in-memory stores.

use async_trait::async_trait;
use domain::models::{BackendKind, Categoria, SchemaVersion, Tarea};
use uuid::Uuid;

use crate::error::StoreError;

/// A storage backend for categories and tasks.
///
/// Implementations assume their inputs were validated by the `Database`
/// handle. They still enforce referential integrity and report writes made
/// before the schema exists as `StoreError::SchemaMissing`.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    fn backend_kind(&self) -> BackendKind;

    fn schema_version(&self) -> SchemaVersion;

    /// Checks that the backend answers.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Creates the schema if it is absent. Returns `true` when something was created.
    async fn ensure_schema(&self) -> Result<bool, StoreError>;

    /// Drops the schema with all its data and creates it again.
    async fn reset_schema(&self) -> Result<(), StoreError>;

    async fn insert_categoria(&self, categoria: &Categoria) -> Result<Categoria, StoreError>;

    async fn find_categoria(&self, id: Uuid) -> Result<Option<Categoria>, StoreError>;

    async fn list_categorias(&self) -> Result<Vec<Categoria>, StoreError>;

    /// Overwrites the stored row. Returns `None` if no row has that id.
    async fn update_categoria(&self, categoria: &Categoria)
        -> Result<Option<Categoria>, StoreError>;

    /// Deletes a category and, by cascade, its tasks.
    async fn delete_categoria(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn insert_tarea(&self, tarea: &Tarea) -> Result<Tarea, StoreError>;

    async fn find_tarea(&self, id: Uuid) -> Result<Option<Tarea>, StoreError>;

    async fn list_tareas(&self) -> Result<Vec<Tarea>, StoreError>;

    async fn list_tareas_by_categoria(&self, categoria_id: Uuid)
        -> Result<Vec<Tarea>, StoreError>;

    async fn update_tarea(&self, tarea: &Tarea) -> Result<Option<Tarea>, StoreError>;

    async fn delete_tarea(&self, id: Uuid) -> Result<bool, StoreError>;
}
