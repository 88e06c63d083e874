//! Tarea repository for database operations.

use domain::models::Tarea;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{TareaEntity, TAREA_COLUMNS};
use crate::metrics::QueryTimer;

/// Repository for the `"Tareas"` table.
#[derive(Clone)]
pub struct TareaRepository {
    pool: PgPool,
}

impl TareaRepository {
    /// Creates a new TareaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new task row. The summary is not part of the row.
    pub async fn insert(&self, tarea: &Tarea) -> Result<TareaEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_tarea");
        let result = sqlx::query_as::<_, TareaEntity>(
            r#"
            INSERT INTO "Tareas" ("TareaId", "CategoriaId", "Titulo", "Descripcion", "PrioridadTareas", "FechaCreacion")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING "TareaId", "CategoriaId", "Titulo", "Descripcion", "PrioridadTareas", "FechaCreacion"
            "#,
        )
        .bind(tarea.id)
        .bind(tarea.categoria_id)
        .bind(&tarea.title)
        .bind(&tarea.description)
        .bind(tarea.priority.map(|p| p.as_i16()))
        .bind(tarea.creation_date)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a task by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TareaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_tarea_by_id");
        let sql = format!(
            r#"SELECT {} FROM "Tareas" WHERE "TareaId" = $1"#,
            TAREA_COLUMNS
        );
        let result = sqlx::query_as::<_, TareaEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// List all tasks ordered by title.
    pub async fn list(&self) -> Result<Vec<TareaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tareas");
        let sql = format!(
            r#"SELECT {} FROM "Tareas" ORDER BY "Titulo", "TareaId""#,
            TAREA_COLUMNS
        );
        let result = sqlx::query_as::<_, TareaEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// List the tasks owned by a category.
    pub async fn list_by_categoria(
        &self,
        categoria_id: Uuid,
    ) -> Result<Vec<TareaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tareas_by_categoria");
        let sql = format!(
            r#"SELECT {} FROM "Tareas" WHERE "CategoriaId" = $1 ORDER BY "Titulo", "TareaId""#,
            TAREA_COLUMNS
        );
        let result = sqlx::query_as::<_, TareaEntity>(&sql)
            .bind(categoria_id)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Overwrite a task row. Returns `None` if the id does not exist.
    pub async fn update(&self, tarea: &Tarea) -> Result<Option<TareaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_tarea");
        let result = sqlx::query_as::<_, TareaEntity>(
            r#"
            UPDATE "Tareas"
            SET "CategoriaId" = $2, "Titulo" = $3, "Descripcion" = $4,
                "PrioridadTareas" = $5, "FechaCreacion" = $6
            WHERE "TareaId" = $1
            RETURNING "TareaId", "CategoriaId", "Titulo", "Descripcion", "PrioridadTareas", "FechaCreacion"
            "#,
        )
        .bind(tarea.id)
        .bind(tarea.categoria_id)
        .bind(&tarea.title)
        .bind(&tarea.description)
        .bind(tarea.priority.map(|p| p.as_i16()))
        .bind(tarea.creation_date)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a task.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_tarea");
        let result = sqlx::query(r#"DELETE FROM "Tareas" WHERE "TareaId" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
