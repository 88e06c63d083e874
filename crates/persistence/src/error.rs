//! Store error taxonomy.

use thiserror::Error;

/// Errors returned by the `Database` handle and its stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field violates a declared constraint. Nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing store is unreachable or misconfigured.
    #[error("Database unavailable: {0}")]
    Connectivity(String),

    /// No backend is bound to the handle.
    #[error("No database configured")]
    NotConfigured,

    /// The schema has not been created yet.
    #[error("Database schema does not exist")]
    SchemaMissing,

    /// A task references a category that does not exist. Nothing was written.
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Stable code used in API error bodies and logs.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "validation_error",
            StoreError::Connectivity(_) => "connectivity_error",
            StoreError::NotConfigured => "no_database",
            StoreError::SchemaMissing => "schema_missing",
            StoreError::ForeignKey(_) => "foreign_key_violation",
            StoreError::NotFound(_) => "not_found",
            StoreError::Database(_) => "database_error",
        }
    }
}

/// SQLSTATE codes that mean the server could not be used at all.
const CONNECTIVITY_SQLSTATES: &[&str] = &[
    "08000", // connection_exception
    "08001", // sqlclient_unable_to_establish_sqlconnection
    "08006", // connection_failure
    "28000", // invalid_authorization_specification
    "28P01", // invalid_password
    "3D000", // invalid_catalog_name
    "57P03", // cannot_connect_now
];

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            e @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_)) => StoreError::Connectivity(e.to_string()),
            sqlx::Error::RowNotFound => StoreError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23503") => StoreError::ForeignKey("Referenced categoria does not exist".into()),
                Some("42P01") => StoreError::SchemaMissing,
                Some("23502") | Some("23514") | Some("22001") => {
                    StoreError::Validation(db_err.message().to_string())
                }
                Some(code) if CONNECTIVITY_SQLSTATES.contains(&code) => {
                    StoreError::Connectivity(db_err.message().to_string())
                }
                _ => StoreError::Database(db_err.to_string()),
            },
            other => StoreError::Database(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        StoreError::Validation(messages.join("; "))
    }
}
