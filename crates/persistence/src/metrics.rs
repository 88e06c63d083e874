//! Database metrics collection.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record database query duration.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Count a schema lifecycle operation (`ensure` or `reset`).
pub fn record_schema_operation(operation: &'static str, backend: &'static str) {
    counter!(
        "database_schema_operations_total",
        "operation" => operation,
        "backend" => backend
    )
    .increment(1);
}

/// Times a database operation. Call `record` once it has finished.
///
/// ```ignore
/// let timer = QueryTimer::new("find_tarea_by_id");
/// let result = sqlx::query_as::<_, TareaEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.query_name, duration);
    }
}
