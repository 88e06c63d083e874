//! HTTP route handlers.

pub mod categorias;
pub mod health;
pub mod root;
pub mod tareas;
