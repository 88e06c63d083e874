//! In-memory store.
//!
//! Holds both collections behind a single `RwLock`. The tables only exist
//! after `ensure_schema`, so writes before that fail the same way they do
//! against a server without tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::models::{BackendKind, Categoria, Priority, SchemaVersion, Tarea};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::Store;

/// Stored form of a task. Has no summary; it is rebuilt on every read.
#[derive(Debug, Clone)]
struct TareaRow {
    categoria_id: Option<Uuid>,
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    creation_date: Option<DateTime<Utc>>,
}

impl TareaRow {
    fn from_tarea(tarea: &Tarea) -> Self {
        Self {
            categoria_id: tarea.categoria_id,
            title: tarea.title.clone(),
            description: tarea.description.clone(),
            priority: tarea.priority,
            creation_date: tarea.creation_date,
        }
    }

    fn to_tarea(&self, id: Uuid) -> Tarea {
        Tarea::new(
            id,
            self.categoria_id,
            self.title.clone(),
            self.description.clone(),
            self.priority,
            self.creation_date,
        )
    }
}

#[derive(Debug, Default)]
struct Tables {
    categorias: HashMap<Uuid, Categoria>,
    tareas: HashMap<Uuid, TareaRow>,
}

impl Tables {
    fn check_categoria_exists(&self, categoria_id: Option<Uuid>) -> Result<(), StoreError> {
        match categoria_id {
            Some(id) if !self.categorias.contains_key(&id) => Err(StoreError::ForeignKey(
                format!("Categoria {} does not exist", id),
            )),
            _ => Ok(()),
        }
    }
}

fn sorted_tareas<'a>(rows: impl Iterator<Item = (&'a Uuid, &'a TareaRow)>) -> Vec<Tarea> {
    let mut tareas: Vec<Tarea> = rows.map(|(id, row)| row.to_tarea(*id)).collect();
    tareas.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
    tareas
}

/// Process-local store. Data lives as long as the store.
#[derive(Debug)]
pub struct MemoryStore {
    version: SchemaVersion,
    tables: RwLock<Option<Tables>>,
}

impl MemoryStore {
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            tables: RwLock::new(None),
        }
    }

    /// Drops fields the schema version does not store.
    fn storable(&self, categoria: &Categoria) -> Categoria {
        let mut stored = categoria.clone();
        if !self.version.stores_weight() {
            stored.weight = None;
        }
        stored
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(SchemaVersion::default())
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::InMemory
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.is_some() {
            return Ok(false);
        }
        *tables = Some(Tables::default());
        Ok(true)
    }

    async fn reset_schema(&self) -> Result<(), StoreError> {
        // The write guard is held for the whole drop+create.
        let mut tables = self.tables.write().await;
        *tables = Some(Tables::default());
        Ok(())
    }

    async fn insert_categoria(&self, categoria: &Categoria) -> Result<Categoria, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        if tables.categorias.contains_key(&categoria.id) {
            return Err(StoreError::Database(format!(
                "Categoria {} already exists",
                categoria.id
            )));
        }
        let stored = self.storable(categoria);
        tables.categorias.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_categoria(&self, id: Uuid) -> Result<Option<Categoria>, StoreError> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(tables.categorias.get(&id).cloned())
    }

    async fn list_categorias(&self) -> Result<Vec<Categoria>, StoreError> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        let mut categorias: Vec<Categoria> = tables.categorias.values().cloned().collect();
        categorias.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(categorias)
    }

    async fn update_categoria(
        &self,
        categoria: &Categoria,
    ) -> Result<Option<Categoria>, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        let stored = self.storable(categoria);
        match tables.categorias.get_mut(&categoria.id) {
            Some(existing) => {
                *existing = stored.clone();
                Ok(Some(stored))
            }
            None => Ok(None),
        }
    }

    async fn delete_categoria(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        if tables.categorias.remove(&id).is_none() {
            return Ok(false);
        }
        tables.tareas.retain(|_, row| row.categoria_id != Some(id));
        Ok(true)
    }

    async fn insert_tarea(&self, tarea: &Tarea) -> Result<Tarea, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        tables.check_categoria_exists(tarea.categoria_id)?;
        if tables.tareas.contains_key(&tarea.id) {
            return Err(StoreError::Database(format!(
                "Tarea {} already exists",
                tarea.id
            )));
        }
        let row = TareaRow::from_tarea(tarea);
        let stored = row.to_tarea(tarea.id);
        tables.tareas.insert(tarea.id, row);
        Ok(stored)
    }

    async fn find_tarea(&self, id: Uuid) -> Result<Option<Tarea>, StoreError> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(tables.tareas.get(&id).map(|row| row.to_tarea(id)))
    }

    async fn list_tareas(&self) -> Result<Vec<Tarea>, StoreError> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(sorted_tareas(tables.tareas.iter()))
    }

    async fn list_tareas_by_categoria(
        &self,
        categoria_id: Uuid,
    ) -> Result<Vec<Tarea>, StoreError> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::SchemaMissing)?;
        Ok(sorted_tareas(
            tables
                .tareas
                .iter()
                .filter(|(_, row)| row.categoria_id == Some(categoria_id)),
        ))
    }

    async fn update_tarea(&self, tarea: &Tarea) -> Result<Option<Tarea>, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        if !tables.tareas.contains_key(&tarea.id) {
            return Ok(None);
        }
        tables.check_categoria_exists(tarea.categoria_id)?;
        let row = TareaRow::from_tarea(tarea);
        let stored = row.to_tarea(tarea.id);
        tables.tareas.insert(tarea.id, row);
        Ok(Some(stored))
    }

    async fn delete_tarea(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::SchemaMissing)?;
        Ok(tables.tareas.remove(&id).is_some())
    }
}
