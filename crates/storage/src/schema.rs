//! Text description of the database schema for prompts.
//!
//! Each table renders as a `CREATE TABLE` statement followed by a commented
//! block of sample rows, the layout SQL-generating models are most used to.

use ipl_stats_core::ResultSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

/// Primary or foreign key, with the definition as PostgreSQL prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDef {
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<ConstraintDef>,
    pub sample: ResultSet,
}

impl TableDef {
    fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let null = if c.nullable { "" } else { " NOT NULL" };
                format!("\t{} {}{null}", quote_ident(&c.name), c.data_type.to_uppercase())
            })
            .collect();
        lines.extend(
            self.constraints
                .iter()
                .map(|k| format!("\tCONSTRAINT {} {}", quote_ident(&k.name), k.definition)),
        );

        let mut out =
            format!("CREATE TABLE {} (\n{}\n)", quote_ident(&self.name), lines.join(", \n"));
        if !self.sample.columns.is_empty() {
            out.push_str(&format!(
                "\n\n/*\n{} rows from {} table:\n{}\n*/",
                self.sample.row_count(),
                self.name,
                self.sample.render_tsv()
            ));
        }
        out
    }
}

/// Identifier as it must be written in SQL: bare when it is a plain
/// lowercase name, double-quoted otherwise.
pub(crate) fn quote_ident(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars.next().is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if plain { name.to_owned() } else { format!("\"{}\"", name.replace('"', "\"\"")) }
}

/// Render every table, separated by blank lines.
#[must_use]
pub fn render_table_info(tables: &[TableDef]) -> String {
    tables.iter().map(TableDef::render).collect::<Vec<_>>().join("\n\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn teams() -> TableDef {
        TableDef {
            name: "teams".to_owned(),
            columns: vec![
                ColumnDef { name: "id".to_owned(), data_type: "integer".to_owned(), nullable: false },
                ColumnDef { name: "name".to_owned(), data_type: "text".to_owned(), nullable: true },
            ],
            constraints: vec![ConstraintDef {
                name: "teams_pkey".to_owned(),
                definition: "PRIMARY KEY (id)".to_owned(),
            }],
            sample: ResultSet::new(
                vec!["id".to_owned(), "name".to_owned()],
                vec![vec![json!(1), json!("Mumbai Indians")], vec![json!(2), json!("Punjab Kings")]],
            ),
        }
    }

    #[test]
    fn test_render_table_with_samples() {
        let expected = "CREATE TABLE teams (\n\
                        \tid INTEGER NOT NULL, \n\
                        \tname TEXT, \n\
                        \tCONSTRAINT teams_pkey PRIMARY KEY (id)\n\
                        )\n\
                        \n\
                        /*\n\
                        2 rows from teams table:\n\
                        id\tname\n\
                        1\tMumbai Indians\n\
                        2\tPunjab Kings\n\
                        */";
        assert_eq!(render_table_info(&[teams()]), expected);
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("player_matches"), "player_matches");
        assert_eq!(quote_ident("season_2024"), "season_2024");
        assert_eq!(quote_ident("Weird Col"), "\"Weird Col\"");
        assert_eq!(quote_ident("Runs"), "\"Runs\"");
        assert_eq!(quote_ident("1st_innings"), "\"1st_innings\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_render_quotes_irregular_identifiers() {
        let table = TableDef {
            name: "Match Stats".to_owned(),
            columns: vec![ColumnDef {
                name: "Weird Col".to_owned(),
                data_type: "numeric".to_owned(),
                nullable: true,
            }],
            constraints: Vec::new(),
            sample: ResultSet::default(),
        };
        assert_eq!(
            render_table_info(&[table]),
            "CREATE TABLE \"Match Stats\" (\n\t\"Weird Col\" NUMERIC\n)"
        );
    }

    #[test]
    fn test_render_multiple_tables_without_samples() {
        let mut venues = teams();
        venues.name = "venues".to_owned();
        venues.constraints.clear();
        venues.sample = ResultSet::default();

        let info = render_table_info(&[teams(), venues]);
        assert!(info.contains("*/\n\n\nCREATE TABLE venues (\n\tid INTEGER NOT NULL, \n\tname TEXT\n)"));
        assert!(!info.contains("rows from venues"));
    }
}
