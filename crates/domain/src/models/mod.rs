//! Domain models for Tareas.

pub mod categoria;
pub mod schema;
pub mod tarea;

pub use categoria::{Categoria, NewCategoria, UpdateCategoria};
pub use schema::{BackendKind, SchemaVersion};
pub use tarea::{NewTarea, Priority, Tarea, UpdateTarea};

use serde::{Deserialize, Deserializer};

/// Deserializes a nullable field of an update payload so that an absent key
/// stays `None` and an explicit `null` becomes `Some(None)`.
///
/// Use together with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Merges one nullable field of an update onto its current value.
pub(crate) fn merge<T>(update: Option<Option<T>>, current: Option<T>) -> Option<T> {
    update.unwrap_or(current)
}
