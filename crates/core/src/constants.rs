//! Shared constants for ipl-stats.
//!
//! Centralizes magic numbers used across crates.

/// SQL dialect named in the SQL generation prompt.
pub const SQL_DIALECT: &str = "postgresql";

/// Default row cap the SQL generator is asked to respect.
pub const DEFAULT_TOP_K: usize = 10;

/// Sample rows rendered per table in the schema description.
pub const SAMPLE_ROWS_IN_TABLE_INFO: usize = 3;

/// Tables the IPL dataset is expected to expose.
pub const EXPECTED_TABLES: &[&str] = &[
    "deliveries",
    "matches",
    "player_matches",
    "player_teams",
    "players",
    "teams",
    "venues",
];

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Per-query statement timeout applied inside the read-only transaction.
pub const PG_STATEMENT_TIMEOUT_MS: u64 = 30_000;

/// Timeout for a single chat completion request.
pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum accepted question length in bytes.
pub const MAX_QUESTION_LEN: usize = 2_000;

/// Maximum bytes of the rendered result passed to the answer prompt.
/// The cut falls on a UTF-8 character boundary.
pub const MAX_RESULT_BYTES_IN_PROMPT: usize = 20_000;

/// Shown when a query returns no rows.
pub const NO_RESULT_TEXT: &str = "No result found";

/// Default Gemini OpenAI-compatible endpoint.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default Groq OpenAI-compatible endpoint.
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
