//! Categoria repository for database operations.

use domain::models::{Categoria, SchemaVersion};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{categoria_columns, CategoriaEntity};
use crate::metrics::QueryTimer;

/// Repository for the `"Categorias"` table.
#[derive(Clone)]
pub struct CategoriaRepository {
    pool: PgPool,
    version: SchemaVersion,
}

impl CategoriaRepository {
    /// Creates a new CategoriaRepository with the given connection pool.
    pub fn new(pool: PgPool, version: SchemaVersion) -> Self {
        Self { pool, version }
    }

    /// Insert a new category row.
    pub async fn insert(&self, categoria: &Categoria) -> Result<CategoriaEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_categoria");
        let result = if self.version.stores_weight() {
            sqlx::query_as::<_, CategoriaEntity>(
                r#"
                INSERT INTO "Categorias" ("CategoriaId", "Nombre", "Descripcion", "Peso")
                VALUES ($1, $2, $3, $4)
                RETURNING "CategoriaId", "Nombre", "Descripcion", "Peso"
                "#,
            )
            .bind(categoria.id)
            .bind(&categoria.name)
            .bind(&categoria.description)
            .bind(categoria.weight)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, CategoriaEntity>(
                r#"
                INSERT INTO "Categorias" ("CategoriaId", "Nombre", "Descripcion")
                VALUES ($1, $2, $3)
                RETURNING "CategoriaId", "Nombre", "Descripcion"
                "#,
            )
            .bind(categoria.id)
            .bind(&categoria.name)
            .bind(&categoria.description)
            .fetch_one(&self.pool)
            .await
        };
        timer.record();
        result
    }

    /// Find a category by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoriaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_categoria_by_id");
        let sql = format!(
            r#"SELECT {} FROM "Categorias" WHERE "CategoriaId" = $1"#,
            categoria_columns(self.version)
        );
        let result = sqlx::query_as::<_, CategoriaEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// List all categories ordered by name.
    pub async fn list(&self) -> Result<Vec<CategoriaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_categorias");
        let sql = format!(
            r#"SELECT {} FROM "Categorias" ORDER BY "Nombre", "CategoriaId""#,
            categoria_columns(self.version)
        );
        let result = sqlx::query_as::<_, CategoriaEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Overwrite a category row. Returns `None` if the id does not exist.
    pub async fn update(
        &self,
        categoria: &Categoria,
    ) -> Result<Option<CategoriaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_categoria");
        let result = if self.version.stores_weight() {
            sqlx::query_as::<_, CategoriaEntity>(
                r#"
                UPDATE "Categorias"
                SET "Nombre" = $2, "Descripcion" = $3, "Peso" = $4
                WHERE "CategoriaId" = $1
                RETURNING "CategoriaId", "Nombre", "Descripcion", "Peso"
                "#,
            )
            .bind(categoria.id)
            .bind(&categoria.name)
            .bind(&categoria.description)
            .bind(categoria.weight)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, CategoriaEntity>(
                r#"
                UPDATE "Categorias"
                SET "Nombre" = $2, "Descripcion" = $3
                WHERE "CategoriaId" = $1
                RETURNING "CategoriaId", "Nombre", "Descripcion"
                "#,
            )
            .bind(categoria.id)
            .bind(&categoria.name)
            .bind(&categoria.description)
            .fetch_optional(&self.pool)
            .await
        };
        timer.record();
        result
    }

    /// Delete a category. Its tasks go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_categoria");
        let result = sqlx::query(r#"DELETE FROM "Categorias" WHERE "CategoriaId" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
