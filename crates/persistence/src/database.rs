//! The `Database` handle.
//!
//! A cheap-to-clone handle that is either bound to a `Store` or unbound.
//! Handlers receive it as an explicit parameter. Every write validates its
//! input before the store sees it.

use domain::models::{
    BackendKind, Categoria, NewCategoria, NewTarea, SchemaVersion, Tarea, UpdateCategoria,
    UpdateTarea,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::db::{create_pool, BackendSetting, DatabaseConfig};
use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::metrics::record_schema_operation;
use crate::postgres::PgStore;
use crate::store::Store;

#[derive(Clone)]
pub struct Database {
    store: Option<Arc<dyn Store>>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.backend_kind().ok())
            .finish()
    }
}

impl Database {
    /// A handle with no backend. Every operation fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn in_memory(version: SchemaVersion) -> Self {
        Self::with_store(MemoryStore::new(version))
    }

    pub fn postgres(pool: sqlx::PgPool, version: SchemaVersion) -> Self {
        Self::with_store(PgStore::new(pool, version))
    }

    pub fn with_store(store: impl Store) -> Self {
        Self {
            store: Some(Arc::new(store)),
        }
    }

    /// Binds the backend named by the configuration.
    ///
    /// For PostgreSQL this builds a lazy pool; an unreachable server shows up
    /// as `Connectivity` on the first operation. An empty connection string
    /// leaves the handle unbound, as with `BackendSetting::None`.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let database = match config.backend {
            BackendSetting::None => {
                warn!("No database backend configured");
                Self::unconfigured()
            }
            BackendSetting::Memory => Self::in_memory(config.schema_version),
            BackendSetting::Postgres if config.url.is_empty() => {
                warn!("PostgreSQL backend selected without a connection string; no database bound");
                Self::unconfigured()
            }
            BackendSetting::Postgres => {
                let pool = create_pool(config)?;
                Self::postgres(pool, config.schema_version)
            }
        };
        if let Ok(kind) = database.backend_kind() {
            info!(backend = %kind, version = %config.schema_version, "Database handle bound");
        }
        Ok(database)
    }

    fn store(&self) -> Result<&dyn Store, StoreError> {
        self.store.as_deref().ok_or(StoreError::NotConfigured)
    }

    /// Reports which backend is bound.
    pub fn backend_kind(&self) -> Result<BackendKind, StoreError> {
        Ok(self.store()?.backend_kind())
    }

    pub fn schema_version(&self) -> Result<SchemaVersion, StoreError> {
        Ok(self.store()?.schema_version())
    }

    /// Checks that the bound backend answers.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store()?.ping().await
    }

    /// Creates the schema if it does not exist. Calling it again is a no-op.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let store = self.store()?;
        let kind = store.backend_kind();
        match store.ensure_schema().await {
            Ok(created) => {
                record_schema_operation("ensure", kind.as_str());
                info!(backend = %kind, created, "Ensured database schema");
                Ok(())
            }
            Err(err) => {
                warn!(backend = %kind, error = %err, "Failed to ensure database schema");
                Err(err)
            }
        }
    }

    /// Drops the schema, losing all stored data, and creates it again.
    pub async fn reset_schema(&self) -> Result<(), StoreError> {
        let store = self.store()?;
        let kind = store.backend_kind();
        match store.reset_schema().await {
            Ok(()) => {
                record_schema_operation("reset", kind.as_str());
                warn!(backend = %kind, "Database schema reset; all data dropped");
                Ok(())
            }
            Err(err) => {
                warn!(backend = %kind, error = %err, "Failed to reset database schema");
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Categorias
    // ------------------------------------------------------------------

    pub async fn create_categoria(&self, input: NewCategoria) -> Result<Categoria, StoreError> {
        let store = self.store()?;
        input.validate()?;
        store.insert_categoria(&input.into_categoria(Uuid::new_v4())).await
    }

    pub async fn get_categoria(&self, id: Uuid) -> Result<Categoria, StoreError> {
        self.store()?
            .find_categoria(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Categoria {}", id)))
    }

    pub async fn list_categorias(&self) -> Result<Vec<Categoria>, StoreError> {
        self.store()?.list_categorias().await
    }

    pub async fn update_categoria(
        &self,
        id: Uuid,
        input: UpdateCategoria,
    ) -> Result<Categoria, StoreError> {
        let store = self.store()?;
        input.validate()?;
        let current = self.get_categoria(id).await?;
        store
            .update_categoria(&input.apply_to(current))
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Categoria {}", id)))
    }

    /// Deletes a category together with its tasks.
    pub async fn delete_categoria(&self, id: Uuid) -> Result<(), StoreError> {
        if self.store()?.delete_categoria(id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("Categoria {}", id)))
        }
    }

    // ------------------------------------------------------------------
    // Tareas
    // ------------------------------------------------------------------

    pub async fn create_tarea(&self, input: NewTarea) -> Result<Tarea, StoreError> {
        let store = self.store()?;
        input.validate()?;
        store.insert_tarea(&input.into_tarea(Uuid::new_v4())).await
    }

    pub async fn get_tarea(&self, id: Uuid) -> Result<Tarea, StoreError> {
        self.store()?
            .find_tarea(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Tarea {}", id)))
    }

    pub async fn list_tareas(&self) -> Result<Vec<Tarea>, StoreError> {
        self.store()?.list_tareas().await
    }

    /// Tasks owned by a category. Fails with `NotFound` if the category does not exist.
    pub async fn list_tareas_by_categoria(
        &self,
        categoria_id: Uuid,
    ) -> Result<Vec<Tarea>, StoreError> {
        let store = self.store()?;
        self.get_categoria(categoria_id).await?;
        store.list_tareas_by_categoria(categoria_id).await
    }

    pub async fn update_tarea(&self, id: Uuid, input: UpdateTarea) -> Result<Tarea, StoreError> {
        let store = self.store()?;
        input.validate()?;
        let current = self.get_tarea(id).await?;
        store
            .update_tarea(&input.apply_to(current))
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Tarea {}", id)))
    }

    pub async fn delete_tarea(&self, id: Uuid) -> Result<(), StoreError> {
        if self.store()?.delete_tarea(id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("Tarea {}", id)))
        }
    }
}
