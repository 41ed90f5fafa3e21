//! PostgreSQL access using sqlx.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use ipl_stats_core::{
    EXPECTED_TABLES, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    PG_STATEMENT_TIMEOUT_MS, ResultSet, SAMPLE_ROWS_IN_TABLE_INFO, SQL_DIALECT,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Column, Executor, PgPool, Row};

use crate::decode::{column_names, row_to_values};
use crate::error::StorageError;
use crate::schema::{ColumnDef, ConstraintDef, TableDef, quote_ident, render_table_info};
use crate::traits::SqlExecutor;

#[derive(Clone, Debug)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!("PgDatabase connected");
        Ok(Self { pool })
    }

    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Describe every base table in the `public` schema.
    pub async fn introspect(&self) -> Result<Vec<TableDef>, StorageError> {
        let table_rows = sqlx::query(
            "SELECT table_name::text AS table_name
             FROM information_schema.tables
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
             ORDER BY table_name",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut tables: BTreeMap<String, TableDef> = BTreeMap::new();
        for row in &table_rows {
            let name: String = row.try_get("table_name")?;
            tables.insert(
                name.clone(),
                TableDef {
                    name,
                    columns: Vec::new(),
                    constraints: Vec::new(),
                    sample: ResultSet::default(),
                },
            );
        }

        let column_rows = sqlx::query(
            "SELECT table_name::text AS table_name,
                    column_name::text AS column_name,
                    data_type::text AS data_type,
                    is_nullable::text AS is_nullable
             FROM information_schema.columns
             WHERE table_schema = 'public'
             ORDER BY table_name, ordinal_position",
        )
        .fetch_all(&self.pool)
        .await?;
        for row in &column_rows {
            let table: String = row.try_get("table_name")?;
            let Some(def) = tables.get_mut(&table) else { continue };
            let nullable: String = row.try_get("is_nullable")?;
            def.columns.push(ColumnDef {
                name: row.try_get("column_name")?,
                data_type: row.try_get("data_type")?,
                nullable: nullable == "YES",
            });
        }

        let constraint_rows = sqlx::query(
            "SELECT cl.relname::text AS table_name,
                    c.conname::text AS name,
                    pg_get_constraintdef(c.oid) AS definition
             FROM pg_constraint c
             JOIN pg_class cl ON cl.oid = c.conrelid
             JOIN pg_namespace n ON n.oid = c.connamespace
             WHERE n.nspname = 'public' AND c.contype IN ('p', 'f')
             ORDER BY 1, c.contype DESC, c.conname",
        )
        .fetch_all(&self.pool)
        .await?;
        for row in &constraint_rows {
            let table: String = row.try_get("table_name")?;
            let Some(def) = tables.get_mut(&table) else { continue };
            def.constraints.push(ConstraintDef {
                name: row.try_get("name")?,
                definition: row.try_get("definition")?,
            });
        }

        for def in tables.values_mut() {
            let sql =
                format!("SELECT * FROM {} LIMIT {SAMPLE_ROWS_IN_TABLE_INFO}", quote_ident(&def.name));
            let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
            def.sample = to_result_set(&rows, || def.columns.iter().map(|c| c.name.clone()).collect())?;
        }

        Ok(tables.into_values().collect())
    }

    /// Schema text embedded in prompts.
    ///
    /// # Errors
    /// Fails if introspection fails or the database has no tables.
    pub async fn table_info(&self) -> Result<String, StorageError> {
        let tables = self.introspect().await?;
        if tables.is_empty() {
            return Err(StorageError::Introspection(
                "no tables found in the public schema".to_owned(),
            ));
        }

        let missing: Vec<&str> = EXPECTED_TABLES
            .iter()
            .copied()
            .filter(|expected| !tables.iter().any(|t| t.name == *expected))
            .collect();
        if !missing.is_empty() {
            tracing::warn!(?missing, "IPL tables missing from the database");
        }

        tracing::info!(tables = tables.len(), "schema introspected");
        Ok(render_table_info(&tables))
    }
}

#[async_trait]
impl SqlExecutor for PgDatabase {
    fn dialect(&self) -> &'static str {
        SQL_DIALECT
    }

    async fn execute(&self, sql: &str) -> Result<ResultSet, StorageError> {
        let statement = sql.trim().trim_end_matches(';').trim_end();
        if statement.is_empty() {
            return Err(StorageError::EmptyStatement);
        }

        let started = Instant::now();
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY").execute(&mut *tx).await?;
        sqlx::query(&format!("SET LOCAL statement_timeout = {PG_STATEMENT_TIMEOUT_MS}"))
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query(statement).fetch_all(&mut *tx).await?;
        let result = if rows.is_empty() {
            let described = (&mut *tx).describe(statement).await?;
            let names = described.columns().iter().map(|c| c.name().to_owned()).collect();
            ResultSet::new(names, Vec::new())
        } else {
            to_result_set(&rows, Vec::new)?
        };
        tx.rollback().await?;

        tracing::info!(
            rows = result.row_count(),
            elapsed_ms = started.elapsed().as_millis(),
            "query executed"
        );
        Ok(result)
    }
}

/// Columns come from the first row; `fallback_columns` is used when there are none.
fn to_result_set<F>(rows: &[PgRow], fallback_columns: F) -> Result<ResultSet, StorageError>
where
    F: FnOnce() -> Vec<String>,
{
    let columns = rows.first().map_or_else(fallback_columns, column_names);
    let values = rows.iter().map(row_to_values).collect::<Result<Vec<_>, _>>()?;
    Ok(ResultSet::new(columns, values))
}
