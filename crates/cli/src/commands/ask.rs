use anyhow::Result;
use ipl_stats_core::{AppConfig, QuerySession};

use crate::build_service;

pub(crate) async fn run(question: String, model: Option<String>, json: bool) -> Result<()> {
    let config = AppConfig::from_env()?;
    let service = build_service(&config).await?;
    let session = service.ask(&question, model.as_deref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print!("{}", render_session(&session));
    }
    Ok(())
}

fn render_session(session: &QuerySession) -> String {
    format!(
        "## Final Answer\n{}\n\n## Expanded Question\n{}\n\n## SQL Query\n{}\n\n## Query Result\n{}\n",
        session.answer,
        session.expanded_question,
        session.sql,
        session.result.render_table(),
    )
}

#[cfg(test)]
mod tests {
    use ipl_stats_core::{ModelChoice, ResultSet};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_session_prints_sections_in_order() {
        let session = QuerySession {
            model: ModelChoice::Gemini20Flash,
            question: "q".to_owned(),
            expanded_question: "expanded".to_owned(),
            sql: "SELECT 1 AS one".to_owned(),
            result: ResultSet::new(vec!["one".to_owned()], vec![vec![json!(1)]]),
            answer: "It is one.".to_owned(),
        };
        let out = render_session(&session);
        let positions: Vec<usize> = ["Final Answer", "Expanded Question", "SQL Query", "Query Result"]
            .iter()
            .map(|h| out.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
        assert!(out.contains("It is one."));
        assert!(out.contains("SELECT 1 AS one"));
    }
}
