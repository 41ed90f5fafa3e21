//! Tabular result of an executed SQL statement.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::NO_RESULT_TEXT;

/// Rows returned by the database. Column order follows the select list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as an aligned plain-text table, or `No result found` when empty.
    #[must_use]
    pub fn render_table(&self) -> String {
        if self.rows.is_empty() {
            return NO_RESULT_TEXT.to_owned();
        }

        let cells: Vec<Vec<String>> =
            self.rows.iter().map(|row| row.iter().map(display_value).collect()).collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let mut lines = Vec::with_capacity(cells.len() + 2);
        lines.push(format_line(&self.columns, &widths));
        lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
        for row in &cells {
            lines.push(format_line(row, &widths));
        }
        lines.join("\n")
    }

    /// Tab-separated rendering with a header line, used for schema samples.
    #[must_use]
    pub fn render_tsv(&self) -> String {
        let mut out = self.columns.join("\t");
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.iter().map(display_value).collect::<Vec<_>>().join("\t"));
        }
        out
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map_or("", String::as_str);
            format!("{cell:<w$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_owned()
}

/// Human-readable form of a single cell.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
