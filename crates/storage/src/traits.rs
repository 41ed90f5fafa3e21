//! Database seam used by the question pipeline.

use async_trait::async_trait;
use ipl_stats_core::ResultSet;

use crate::error::StorageError;

/// Executes one generated SQL statement and returns its rows.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Dialect name quoted in the SQL generation prompt.
    fn dialect(&self) -> &'static str;

    /// Run `sql` and collect every row.
    async fn execute(&self, sql: &str) -> Result<ResultSet, StorageError>;
}
