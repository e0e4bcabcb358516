/// Example queries offered while the session is idle. Injected explicitly
/// rather than pulled from ambient context so callers can swap feeds.
#[derive(Debug, Clone)]
pub struct ExampleFeed {
    entries: Vec<String>,
}

impl ExampleFeed {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 1-based lookup matching the numbering the REPL prints.
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }
}

impl Default for ExampleFeed {
    fn default() -> Self {
        Self::new(vec![
            "3 zipcodes in San Francisco that have the highest females?".to_string(),
            "Which zipcodes have the median income closest to the national median income?"
                .to_string(),
            "Five zipcodes in New York City with the lowest crime?".to_string(),
            "Richest neighborhood in Houston, TX".to_string(),
        ])
    }
}
