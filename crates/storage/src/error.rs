//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering query execution and schema introspection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure, including errors reported by
    /// PostgreSQL for the generated statement.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A returned cell could not be turned into a JSON value.
    #[error("could not decode column {column}: {message}")]
    Decode { column: String, message: String },

    /// Nothing left to run after trimming.
    #[error("empty SQL statement")]
    EmptyStatement,

    /// Schema description could not be assembled.
    #[error("schema introspection failed: {0}")]
    Introspection(String),
}
