pub mod api;
pub mod error;
pub mod geo;
pub mod orchestrator;
pub mod repl;
pub mod sanitize;
pub mod transform;
pub mod view;

pub use api::{
    create_http_backend, create_mock_backend, ApiResponse, HttpBackend, MockBackend, QueryResult,
    TelemetryClient, TextToSqlBackend, DEFAULT_ENDPOINT,
};
pub use error::{CensusqError, Result};
pub use geo::{
    city_circle_layer, fill_layer, point_features, tile_filter_labels, zip_circle_layer,
    BoundingBox, GeoPoint,
};
pub use orchestrator::{Orchestrator, QueryPhase, RequestTicket, SessionState};
pub use repl::{ExampleFeed, InteractiveRepl, ReplCommand};
pub use sanitize::sanitize_query;
pub use transform::{
    extract_geo_points, filtered_columns, table_rows, transform, GeoColumn, Transformed,
};
pub use view::{CameraAnimation, ViewState, FIT_DURATION_MS, FIT_PADDING};
