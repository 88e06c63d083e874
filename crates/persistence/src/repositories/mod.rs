//! Repository implementations for database operations.

pub mod categoria;
pub mod tarea;

pub use categoria::CategoriaRepository;
pub use tarea::TareaRepository;
