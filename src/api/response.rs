use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column-oriented query output as the backend returns it. `column_names`
/// is order-significant; every row object's keys are a subset of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub results: Vec<Map<String, Value>>,
}

impl QueryResult {
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }
}

/// Wire shape of a text-to-SQL reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default)]
    pub sql_query: String,
    #[serde(default)]
    pub result: QueryResult,
}
