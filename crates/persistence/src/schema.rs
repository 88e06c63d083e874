//! Schema lifecycle for PostgreSQL.
//!
//! Both `ensure` and `reset` run inside one transaction that first takes a
//! transaction-scoped advisory lock, so concurrent lifecycle calls from any
//! process against the same database run one after another.

use domain::models::SchemaVersion;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info};

use crate::metrics::QueryTimer;

/// Advisory lock key shared by every schema lifecycle operation.
pub const SCHEMA_LOCK_KEY: i64 = 0x7461_7265_6173; // "tareas"

const CREATE_CATEGORIAS_V1: &str = r#"
CREATE TABLE IF NOT EXISTS "Categorias" (
    "CategoriaId" UUID PRIMARY KEY,
    "Nombre" VARCHAR(150) NOT NULL CHECK (length(btrim("Nombre")) > 0),
    "Descripcion" TEXT
)
"#;

const CREATE_TAREAS: &str = r#"
CREATE TABLE IF NOT EXISTS "Tareas" (
    "TareaId" UUID PRIMARY KEY,
    "CategoriaId" UUID REFERENCES "Categorias" ("CategoriaId") ON DELETE CASCADE,
    "Titulo" VARCHAR(200) NOT NULL CHECK (length(btrim("Titulo")) > 0),
    "Descripcion" TEXT,
    "PrioridadTareas" SMALLINT CHECK ("PrioridadTareas" BETWEEN 0 AND 2),
    "FechaCreacion" TIMESTAMPTZ
)
"#;

const CREATE_TAREAS_CATEGORIA_INDEX: &str =
    r#"CREATE INDEX IF NOT EXISTS "IX_Tareas_CategoriaId" ON "Tareas" ("CategoriaId")"#;

/// Additive step from `v1` to `v2`.
const MIGRATE_V1_TO_V2: &str = r#"ALTER TABLE "Categorias" ADD COLUMN IF NOT EXISTS "Peso" INTEGER"#;

const DROP_TABLES: &str = r#"DROP TABLE IF EXISTS "Tareas", "Categorias" CASCADE"#;

const COUNT_TABLES: &str = r#"
SELECT COUNT(*)
FROM information_schema.tables
WHERE table_schema = current_schema()
  AND table_name IN ('Categorias', 'Tareas')
"#;

/// DDL statements that bring an empty or older database to `version`, in order.
pub fn create_statements(version: SchemaVersion) -> Vec<&'static str> {
    let mut statements = vec![
        CREATE_CATEGORIAS_V1,
        CREATE_TAREAS,
        CREATE_TAREAS_CATEGORIA_INDEX,
    ];
    if version.stores_weight() {
        statements.push(MIGRATE_V1_TO_V2);
    }
    statements
}

/// Creates and drops the entity tables.
#[derive(Clone)]
pub struct SchemaManager {
    pool: PgPool,
    version: SchemaVersion,
}

impl SchemaManager {
    pub fn new(pool: PgPool, version: SchemaVersion) -> Self {
        Self { pool, version }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Creates whatever part of the schema is missing.
    ///
    /// Returns `true` if either table did not exist beforehand.
    pub async fn ensure(&self) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("ensure_schema");
        let mut tx = self.begin_locked().await?;

        let existing: i64 = sqlx::query_scalar(COUNT_TABLES)
            .fetch_one(&mut *tx)
            .await?;
        self.create(&mut tx).await?;
        tx.commit().await?;
        timer.record();

        let created = existing < 2;
        info!(version = %self.version, created, "Schema ensured");
        Ok(created)
    }

    /// Drops both tables with their data and creates them again.
    pub async fn reset(&self) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("reset_schema");
        let mut tx = self.begin_locked().await?;

        sqlx::query(DROP_TABLES).execute(&mut *tx).await?;
        self.create(&mut tx).await?;
        tx.commit().await?;
        timer.record();

        info!(version = %self.version, "Schema reset");
        Ok(())
    }

    async fn begin_locked(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        debug!(lock_key = SCHEMA_LOCK_KEY, "Acquired schema lock");
        Ok(tx)
    }

    async fn create(&self, tx: &mut Transaction<'static, Postgres>) -> Result<(), sqlx::Error> {
        for statement in create_statements(self.version) {
            sqlx::query(statement).execute(&mut **tx).await?;
        }
        Ok(())
    }
}
