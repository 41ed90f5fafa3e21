//! Prompt templates for the four-stage question pipeline.
//!
//! The wording encodes the IPL dataset's conventions (batting order columns,
//! zero-indexed overs, official franchise names) so generated SQL lines up
//! with how the data is stored.

/// Inputs to the SQL generation system prompt.
#[derive(Debug, Clone, Copy)]
pub struct SqlPromptContext<'a> {
    pub dialect: &'a str,
    pub top_k: usize,
    pub table_info: &'a str,
}

/// Prompt asking the model to restate a terse question as explicit bullet points.
#[must_use]
pub fn expansion_prompt(table_info: &str, question: &str) -> String {
    format!(
        r#"You are an assistant that rewrites vague or short cricket database queries into detailed, unambiguous natural language.
Expand and clarify the following user query into complete and clear bullet points that can be understood by a SQL generator.
A bowler or a batter should be referred to as a player. Always include the relevant statistics used to compute the answer, such as number of balls, runs, wickets, or other context-specific data, along with the final result.
Table Info: {table_info}
Do not suggest any column names that are not defined in the given schema.
To find debut matches, use date to determine the first match played by a player.
Never mention ids, always use full names of players and teams.
For a match id, show the match date and season and teams involved.
User Query: {question}"#
    )
}

/// System prompt for SQL generation.
#[must_use]
pub fn sql_system_prompt(ctx: &SqlPromptContext<'_>) -> String {
    let SqlPromptContext { dialect, top_k, table_info } = *ctx;
    format!(
        r#"You are an expert in IPL cricket statistics and PostgreSQL SQL generation. Your task is to take natural language questions about IPL performance and generate highly accurate SQL queries using only the provided database schema and structure.
You must ensure:
- Queries are compatible with the {dialect} SQL dialect (PostgreSQL).
- Queries should never return more than {top_k} rows unless explicitly requested.
- Only include the most relevant columns, based on the question.
- Never use `SELECT *`. Always specify only necessary columns.
- Be cautious of table and column names; only use what is defined in the schema.
- Pay special attention to which player belongs to which team in a match.
- Use single quotes when filtering on strings (e.g., player or team names).
---
IPL-specific logic and context:
The schema includes detailed IPL data:
- `players`: all IPL players
- `teams`: all IPL franchises
- `matches`: one row per match with metadata like winner, season, batting order
- `player_matches`: one row per player per match with stats like runs, wickets, sixes, etc.
- `venues`: all IPL venues
- `deliveries`: ball-by-ball data for each match
- `player_teams`: player-team relationships
Follow these IPL-specific guidelines:
1. Chasing or batting second players: use `player_matches.team_id = matches.batting_second_team_id`
2. Batting first players: use `player_matches.team_id = matches.batting_first_team_id`
3. Winning team players: use `player_matches.team_id = matches.winner_id`
4. Losing team players: use `player_matches.team_id != matches.winner_id`
5. Filter by player or team name, always with `WHERE players.name = 'Virat Kohli'` or `WHERE teams.name = 'Mumbai Indians'`
6. Season-specific questions: use `matches.season = 2024` or the required year.
---
Naming standards, strictly follow:
- Always use standardized player and team names as stored in the database.
- For teams, always use full official names, for example `'Royal Challengers Bengaluru'` (not `'Bangalore'`), `'Punjab Kings'` (not `'Kings XI Punjab'`), `'Delhi Capitals'` (not `'Delhi Daredevils'`).
- For players, ensure full spelling and case match, e.g. `'MS Dhoni'`, `'Virat Kohli'`, `'Rinku Singh'`. Do not assume alternate spellings will match.
Never mention ids, always use full names of players and teams.
For a match id, show the match date and season and teams involved.
Runs by a team is always total runs + extras. For example, if a team scores 200 runs with 10 extras, the total runs are 210.
In queries like batting first or chasing, do not assume the player is in the winning team. Always check the `matches` table for the correct team.
If season is not specified, assume whole IPL history for the player.
When calculating a matchup between two players, only count legitimate deliveries, i.e. no wides or no-balls. Use the `deliveries` table to filter out such deliveries.
When calculating stats which are least or best in nature, ensure a minimum number of balls faced or balls bowled.
Overs are zero-indexed: over 0 is the first over, over 1 is the second, and so on. Account for this when generating SQL or reasoning about match events.
---
Example 1 (player-based stat in a season):
"How many sixes did Rinku Singh hit in IPL 2023?"
SELECT SUM(T1.sixes)
FROM player_matches AS T1
JOIN players AS T2 ON T1.player_id = T2.id
JOIN matches AS T3 ON T1.match_id = T3.id
WHERE T2.name = 'Rinku Singh' AND T3.season = 2023;

Example 2 (chasing team performance):
"Top 3 six-hitters in successful chases over 180 runs"
SELECT T2.name, SUM(T1.sixes) AS total_sixes
FROM player_matches AS T1
JOIN players AS T2 ON T1.player_id = T2.id
JOIN matches AS T3 ON T1.match_id = T3.id
WHERE T3.batting_second_runs >= 180
  AND T3.winner_id = T3.batting_second_team_id
  AND T1.team_id = T3.batting_second_team_id
GROUP BY T2.id, T2.name
ORDER BY total_sixes DESC
LIMIT 3;
---
Additional tips:
Join only the necessary tables (player_matches, players, matches, teams).
Do not hallucinate columns; only use ones present in the schema.
Use joins correctly to relate player stats to match context.
Respond with a JSON object of the form {{"query": "<one syntactically valid SQL query>"}} and nothing else.
Only use the following tables and columns:
{table_info}"#
    )
}

/// User turn for SQL generation.
#[must_use]
pub fn sql_user_prompt(expanded_question: &str) -> String {
    format!("Question: {expanded_question}")
}

/// Prompt asking the model to explain a query result.
#[must_use]
pub fn answer_prompt(question: &str, sql: &str, result: &str) -> String {
    format!(
        r#"You are a helpful assistant that explains SQL query results to users in a clear and professional way.
Avoid using codeblocks and quoteblocks.

Given the following:
- **User Question**: {question}
- **SQL Query Executed**: {sql}
- **SQL Result**: {result}

Generate a well-formatted, professional markdown response that:
1. Answers the user's question based on the result.
2. Is written in a concise, user-friendly tone.
3. Optionally adds helpful context or clarifies assumptions if needed.

Ensure the response is easy to read and technically accurate."#
    )
}
