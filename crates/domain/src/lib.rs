//! Domain layer for the Tareas backend.
//!
//! This crate contains:
//! - Entity models (Categoria, Tarea) and their input payloads
//! - Field constraints enforced before any write
//! - Schema version and backend kind descriptors

pub mod models;
