/// One line of REPL input. Anything not recognized as a command or an
/// example number is submitted as a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Query(String),
    /// Run the n-th example suggestion (1-based).
    Example(usize),
    Examples,
    Sql,
    GeoJson,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line; blank input is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(n) = trimmed.parse::<usize>() {
            return Some(ReplCommand::Example(n));
        }

        match trimmed {
            ":examples" => Some(ReplCommand::Examples),
            ":sql" => Some(ReplCommand::Sql),
            ":geojson" => Some(ReplCommand::GeoJson),
            ":help" | ":h" => Some(ReplCommand::Help),
            ":quit" | ":q" | ":exit" => Some(ReplCommand::Quit),
            other => Some(ReplCommand::Query(other.to_string())),
        }
    }
}
