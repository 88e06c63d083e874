//! Persistence layer for the Tareas backend.
//!
//! This crate contains:
//! - Database configuration and connection pool management
//! - The `Database` handle and the `Store` backend contract
//! - PostgreSQL and in-memory store implementations
//! - Schema lifecycle (ensure, reset) and entity row mappings

pub mod database;
pub mod db;
pub mod entities;
pub mod error;
pub mod memory;
pub mod metrics;
pub mod postgres;
pub mod repositories;
pub mod schema;
pub mod store;

pub use database::Database;
pub use db::{BackendSetting, DatabaseConfig};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::Store;
