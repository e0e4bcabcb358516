mod backend;
mod response;
mod telemetry;

pub use backend::{
    create_http_backend, create_mock_backend, HttpBackend, MockBackend, TextToSqlBackend,
    DEFAULT_ENDPOINT,
};
pub use response::{ApiResponse, QueryResult};
pub use telemetry::TelemetryClient;
