//! PostgreSQL store.

use async_trait::async_trait;
use domain::models::{BackendKind, Categoria, SchemaVersion, Tarea};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::metrics::QueryTimer;
use crate::repositories::{CategoriaRepository, TareaRepository};
use crate::schema::SchemaManager;
use crate::store::Store;

/// Store backed by a PostgreSQL server.
///
/// Every call borrows a pooled connection for the length of one statement or
/// transaction; the pool takes it back when the call returns or fails.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    schema: SchemaManager,
    categorias: CategoriaRepository,
    tareas: TareaRepository,
}

impl PgStore {
    pub fn new(pool: PgPool, version: SchemaVersion) -> Self {
        Self {
            schema: SchemaManager::new(pool.clone(), version),
            categorias: CategoriaRepository::new(pool.clone(), version),
            tareas: TareaRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::RelationalServer
    }

    fn schema_version(&self) -> SchemaVersion {
        self.schema.version()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let timer = QueryTimer::new("ping");
        let result = sqlx::query("SELECT 1").execute(&self.pool).await;
        timer.record();
        result?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<bool, StoreError> {
        Ok(self.schema.ensure().await?)
    }

    async fn reset_schema(&self) -> Result<(), StoreError> {
        Ok(self.schema.reset().await?)
    }

    async fn insert_categoria(&self, categoria: &Categoria) -> Result<Categoria, StoreError> {
        Ok(self.categorias.insert(categoria).await?.into())
    }

    async fn find_categoria(&self, id: Uuid) -> Result<Option<Categoria>, StoreError> {
        Ok(self.categorias.find_by_id(id).await?.map(Into::into))
    }

    async fn list_categorias(&self) -> Result<Vec<Categoria>, StoreError> {
        let entities = self.categorias.list().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn update_categoria(
        &self,
        categoria: &Categoria,
    ) -> Result<Option<Categoria>, StoreError> {
        Ok(self.categorias.update(categoria).await?.map(Into::into))
    }

    async fn delete_categoria(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.categorias.delete(id).await?)
    }

    async fn insert_tarea(&self, tarea: &Tarea) -> Result<Tarea, StoreError> {
        Ok(self.tareas.insert(tarea).await?.into())
    }

    async fn find_tarea(&self, id: Uuid) -> Result<Option<Tarea>, StoreError> {
        Ok(self.tareas.find_by_id(id).await?.map(Into::into))
    }

    async fn list_tareas(&self) -> Result<Vec<Tarea>, StoreError> {
        let entities = self.tareas.list().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn list_tareas_by_categoria(
        &self,
        categoria_id: Uuid,
    ) -> Result<Vec<Tarea>, StoreError> {
        let entities = self.tareas.list_by_categoria(categoria_id).await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn update_tarea(&self, tarea: &Tarea) -> Result<Option<Tarea>, StoreError> {
        Ok(self.tareas.update(tarea).await?.map(Into::into))
    }

    async fn delete_tarea(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.tareas.delete(id).await?)
    }
}
