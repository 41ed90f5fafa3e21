//! Storage layer for ipl-stats
//!
//! Runs generated SQL against the PostgreSQL IPL dataset inside a read-only
//! transaction and describes the schema for prompts.

mod decode;
mod error;
mod pg_database;
mod schema;
mod traits;

pub use error::StorageError;
pub use pg_database::PgDatabase;
pub use schema::{ColumnDef, ConstraintDef, TableDef, render_table_info};
pub use traits::SqlExecutor;
