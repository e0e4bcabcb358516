use super::feed::ExampleFeed;
use colored::Colorize;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Results table, geo columns already stripped upstream. `None` when there
/// is nothing to show.
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> Option<String> {
    if columns.is_empty() {
        return None;
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(String::as_str));
    for row in rows {
        builder.push_record(row.iter().map(String::as_str));
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    Some(table.to_string())
}

/// Red banner mirroring the submission-error panel.
pub fn render_error_banner(message: &str) -> String {
    format!(
        "{}\n  {}",
        "There were errors with your submission".red().bold(),
        message.red()
    )
}

/// Generated-SQL debug panel. The SQL is run through the parser purely as
/// a debug aid; a parse failure is annotated, never treated as an error.
pub fn render_sql_panel(sql: &str) -> String {
    let mut panel = format!("{}\n{}", "Generated SQL".bold(), sql.dimmed());
    if Parser::parse_sql(&GenericDialect {}, sql).is_err() {
        panel.push_str(&format!(
            "\n{}",
            "warning: generated SQL did not parse".yellow()
        ));
    }
    panel
}

pub fn render_examples(feed: &ExampleFeed) -> String {
    let mut out = String::from("Try these:\n");
    for (i, example) in feed.entries().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, example));
    }
    out.push_str("Enter a number to run an example, or type your own question.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_row() {
        let columns = vec!["zip_code".to_string(), "total_crime".to_string()];
        let rows = vec![
            vec!["94536".to_string(), "12710".to_string()],
            vec!["94112".to_string(), "9055".to_string()],
        ];

        let rendered = render_table(&columns, &rows).unwrap();
        assert!(rendered.contains("zip_code"));
        assert!(rendered.contains("94536"));
        assert!(rendered.contains("9055"));
    }

    #[test]
    fn empty_columns_render_nothing() {
        assert!(render_table(&[], &[]).is_none());
    }

    #[test]
    fn sql_panel_flags_unparsable_sql() {
        colored::control::set_override(false);
        let ok = render_sql_panel("SELECT zip_code FROM acs_census_data");
        assert!(!ok.contains("did not parse"));

        let bad = render_sql_panel("SELEKT nope FROM");
        assert!(bad.contains("did not parse"));
    }

    #[test]
    fn examples_are_numbered_from_one() {
        let rendered = render_examples(&ExampleFeed::default());
        assert!(rendered.contains("1. 3 zipcodes in San Francisco"));
        assert!(rendered.contains("4. Richest neighborhood in Houston, TX"));
    }
}
