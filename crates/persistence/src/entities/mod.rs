//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Column names follow the
//! stored schema (`"Categorias"`, `"Tareas"`); field names follow Rust style.

pub mod categoria;
pub mod tarea;

pub use categoria::{categoria_columns, CategoriaEntity};
pub use tarea::{TareaEntity, TAREA_COLUMNS};
