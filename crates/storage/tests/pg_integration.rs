//! Integration tests for PgDatabase.
//! Run with: DATABASE_URL=... cargo test -p ipl-stats-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use ipl_stats_storage::{PgDatabase, SqlExecutor, StorageError};
use serde_json::json;

async fn connect() -> PgDatabase {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgDatabase integration tests");
    PgDatabase::connect(&url).await.expect("Failed to connect to PostgreSQL")
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_decodes_common_types() {
    let db = connect().await;
    let result = db
        .execute(
            "SELECT 1::int4 AS a, 'Virat Kohli'::text AS b, 142.86::numeric AS c, \
             NULL::int AS d, true AS e, DATE '2024-05-26' AS f;",
        )
        .await
        .unwrap();

    assert_eq!(result.columns, vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(
        result.rows,
        vec![vec![
            json!(1),
            json!("Virat Kohli"),
            json!(142.86),
            json!(null),
            json!(true),
            json!("2024-05-26")
        ]]
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_decodes_arrays_and_intervals() {
    let db = connect().await;
    let result = db
        .execute(
            "SELECT ARRAY['Virat Kohli','MS Dhoni']::varchar[] AS names, \
             INTERVAL '2 days' AS gap, \
             ARRAY[1.5,2.25]::float8[] AS avgs, \
             ARRAY['a',NULL]::text[] AS with_null, \
             ARRAY[142.86, 7]::numeric[] AS strike_rates, \
             ARRAY[true,false]::bool[] AS flags, \
             ARRAY[4,6]::int2[] AS boundaries, \
             SUM(x)::numeric AS total \
             FROM (VALUES (71.43::numeric), (71.43)) AS t(x)",
        )
        .await
        .unwrap();

    assert_eq!(
        result.rows,
        vec![vec![
            json!(["Virat Kohli", "MS Dhoni"]),
            json!("2 days"),
            json!([1.5, 2.25]),
            json!(["a", null]),
            json!([142.86, 7]),
            json!([true, false]),
            json!([4, 6]),
            json!(142.86),
        ]]
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_unknown_binary_type_is_placeholder() {
    let db = connect().await;
    let result = db.execute("SELECT point(1, 2) AS p").await.unwrap();
    assert_eq!(result.rows, vec![vec![json!("<POINT>")]]);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_empty_result_keeps_columns() {
    let db = connect().await;
    let result = db.execute("SELECT 1 AS runs, 'x' AS name WHERE false").await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.columns, vec!["runs", "name"]);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_rejects_writes() {
    let db = connect().await;
    let err = db.execute("CREATE TABLE ipl_stats_should_not_exist (id int)").await.unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
    assert!(err.to_string().contains("read-only"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_reports_invalid_sql() {
    let db = connect().await;
    let err = db.execute("SELECT runs FROM no_such_table").await.unwrap_err();
    assert!(err.to_string().contains("no_such_table"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn pg_execute_rejects_empty_statement() {
    let db = connect().await;
    assert!(matches!(db.execute("  ;  ").await.unwrap_err(), StorageError::EmptyStatement));
}

#[tokio::test]
#[ignore = "requires PostgreSQL with the IPL dataset loaded"]
async fn pg_table_info_describes_ipl_tables() {
    let db = connect().await;
    let info = db.table_info().await.unwrap();
    for table in ["players", "teams", "matches", "player_matches", "deliveries", "venues"] {
        assert!(info.contains(&format!("CREATE TABLE {table} (")), "missing {table}");
    }
    assert!(info.contains("rows from players table:"));
}
