//! Database configuration and connection pool management.

use domain::models::SchemaVersion;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Which backend a `Database` handle is bound to at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendSetting {
    /// PostgreSQL server reached through `url`.
    #[default]
    Postgres,
    /// Process-local store, emptied on restart.
    Memory,
    /// No backend bound; every store operation fails with `NotConfigured`.
    None,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: BackendSetting,

    /// Connection string of the relational server.
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default)]
    pub schema_version: SchemaVersion,

    /// Drop and recreate the schema on every connectivity probe.
    #[serde(default)]
    pub reset_on_probe: bool,

    /// Run `ensure_schema` once before the server starts listening.
    #[serde(default)]
    pub ensure_on_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: BackendSetting::default(),
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            schema_version: SchemaVersion::default(),
            reset_on_probe: false,
            ensure_on_startup: false,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a process-local store.
    pub fn in_memory() -> Self {
        Self {
            backend: BackendSetting::Memory,
            ..Default::default()
        }
    }

    /// Configuration for a PostgreSQL server at `url`.
    pub fn postgres(url: impl Into<String>) -> Self {
        Self {
            backend: BackendSetting::Postgres,
            url: url.into(),
            ..Default::default()
        }
    }
}

fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    0
}
fn default_connect_timeout() -> u64 {
    5
}
fn default_idle_timeout() -> u64 {
    600
}

/// Creates a PostgreSQL connection pool with the given configuration.
///
/// The pool connects lazily, so an unreachable server is reported by the
/// first operation that needs a connection rather than here. Only a malformed
/// connection string fails at this point.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_lazy(&config.url)
}
