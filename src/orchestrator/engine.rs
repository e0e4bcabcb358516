use super::state::{QueryPhase, SessionState};
use crate::api::{ApiResponse, TelemetryClient, TextToSqlBackend};
use crate::error::{CensusqError, Result};
use crate::geo::{tile_filter_labels, BoundingBox};
use crate::sanitize::sanitize_query;
use crate::transform::transform;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle for one in-flight request. Responses are only applied when the
/// ticket still matches the newest issued id, so a slow reply can never
/// overwrite the state of a later submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
}

/// Sequences one query-response cycle: sanitize, fetch, transform, frame
/// the map, publish state for the presentation layer.
pub struct Orchestrator {
    backend: Arc<dyn TextToSqlBackend>,
    telemetry: Option<TelemetryClient>,
    state: SessionState,
    issued: u64,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn TextToSqlBackend>) -> Self {
        Self {
            backend,
            telemetry: None,
            state: SessionState::default(),
            issued: 0,
        }
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryClient) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Sanitize and register a new request. The returned ticket invalidates
    /// every earlier one still awaiting a response.
    pub fn begin(&mut self, query: &str) -> (RequestTicket, String) {
        self.state.phase = QueryPhase::Sanitizing;
        let cleaned = sanitize_query(query);
        debug!(query = %cleaned, "submitting sanitized query");

        if let Some(telemetry) = &self.telemetry {
            telemetry.capture("search");
        }

        self.issued += 1;
        self.state.phase = QueryPhase::AwaitingResponse;
        (RequestTicket { id: self.issued }, cleaned)
    }

    /// Fold a response into the session state. Stale tickets are dropped
    /// without touching state.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<ApiResponse>) {
        if ticket.id != self.issued {
            warn!(
                request = ticket.id,
                newest = self.issued,
                "discarding stale text-to-sql response"
            );
            return;
        }

        match outcome {
            Ok(response) if response.status < 400 => self.apply_success(response),
            Ok(response) => self.apply_failure(CensusqError::Api(response.status).to_string()),
            Err(e) => self.apply_failure(e.to_string()),
        }
    }

    /// Full submit cycle. Failures surface through the session state, not
    /// the return value.
    pub async fn submit(&mut self, query: &str) -> QueryPhase {
        let (ticket, cleaned) = self.begin(query);
        let outcome = self.backend.text_to_sql(&cleaned).await;
        self.apply(ticket, outcome);
        self.state.phase
    }

    /// Return to Idle once the presentation layer has rendered the outcome.
    pub fn acknowledge(&mut self) {
        self.state.phase = QueryPhase::Idle;
    }

    fn apply_success(&mut self, response: ApiResponse) {
        let transformed = transform(&response.result);

        // A result with no usable coordinates leaves the camera where it was.
        if let Ok(bounds) = BoundingBox::from_points(transformed.frame_points()) {
            self.state.last_animation = Some(self.state.view.fit_bounds(&bounds));
        }

        self.state.tile_labels = tile_filter_labels(&transformed.zip_points);
        self.state.sql_query = response.sql_query;
        self.state.columns = transformed.columns;
        self.state.rows = transformed.rows;
        self.state.zip_points = transformed.zip_points;
        self.state.city_points = transformed.city_points;
        self.state.error_message = None;
        self.state.phase = QueryPhase::Success;
    }

    fn apply_failure(&mut self, message: String) {
        // Previous table and map content stays visible alongside the banner.
        self.state.error_message = Some(message);
        self.state.phase = QueryPhase::Failure;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_mock_backend, MockBackend, QueryResult};
    use serde_json::json;

    fn response(sql: &str, result: serde_json::Value) -> ApiResponse {
        ApiResponse {
            status: 200,
            sql_query: sql.to_string(),
            result: serde_json::from_value::<QueryResult>(result).unwrap(),
        }
    }

    fn houston_response() -> ApiResponse {
        response(
            "SELECT zip_code, median_income_for_workers FROM acs_census_data LIMIT 2",
            json!({
                "column_names": ["zip_code", "median_income_for_workers", "lat", "long"],
                "results": [
                    {"zip_code": "77010", "median_income_for_workers": 162500,
                     "lat": 29.7537, "long": -95.3635},
                    {"zip_code": "77005", "median_income_for_workers": 121893,
                     "lat": 29.7180, "long": -95.4239}
                ]
            }),
        )
    }

    #[tokio::test]
    async fn end_to_end_success_updates_table_and_map() {
        let backend = create_mock_backend(vec![Ok(houston_response())]);
        let mut orchestrator = Orchestrator::new(backend.clone());

        let phase = orchestrator.submit("Richest neighborhood in Houston, TX").await;
        assert_eq!(phase, QueryPhase::Success);

        // The request carried the sanitized query.
        let sent = backend.received_queries();
        assert_eq!(sent, vec!["Richest zip code in Houston, TX"]);

        let state = orchestrator.state();
        assert_eq!(state.columns, vec!["zip_code", "median_income_for_workers"]);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows[0], vec!["77010", "162500"]);
        assert_eq!(state.zip_points.len(), 2);
        assert_eq!(
            state.tile_labels,
            vec![
                "<at><openparen>77010<closeparen>",
                "<at><openparen>77005<closeparen>"
            ]
        );
        assert!(state.error_message.is_none());

        // Camera recentered on the two-point bounding box.
        let animation = state.last_animation.expect("camera animation issued");
        assert_eq!(animation.min_lat, 29.7180);
        assert_eq!(animation.max_lat, 29.7537);
        assert!((state.view.longitude - (-95.3635 + -95.4239) / 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn transport_failure_keeps_previous_state_visible() {
        let backend = create_mock_backend(vec![
            Ok(houston_response()),
            Err(CensusqError::Geometry("connection refused".to_string())),
        ]);
        let mut orchestrator = Orchestrator::new(backend);

        orchestrator.submit("richest zip codes in Houston").await;
        let rows_before = orchestrator.state().rows.clone();
        let view_before = orchestrator.state().view;

        let phase = orchestrator.submit("lowest crime areas").await;
        assert_eq!(phase, QueryPhase::Failure);

        let state = orchestrator.state();
        assert!(state.error_message.is_some());
        assert_eq!(state.rows, rows_before);
        assert_eq!(state.view, view_before);
    }

    #[tokio::test]
    async fn app_level_error_status_surfaces_as_failure() {
        let backend = create_mock_backend(vec![Ok(ApiResponse {
            status: 500,
            sql_query: String::new(),
            result: QueryResult::default(),
        })]);
        let mut orchestrator = Orchestrator::new(backend);

        let phase = orchestrator.submit("anything").await;
        assert_eq!(phase, QueryPhase::Failure);
        assert!(orchestrator
            .state()
            .error_message
            .as_deref()
            .unwrap()
            .contains("500"));
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let backend = Arc::new(MockBackend::default());
        let mut orchestrator = Orchestrator::new(backend.clone());

        let (old_ticket, _) = orchestrator.begin("first query");
        let (new_ticket, _) = orchestrator.begin("second query");

        // The older reply arrives last and must not win.
        orchestrator.apply(new_ticket, Ok(houston_response()));
        let rows_after_new = orchestrator.state().rows.clone();

        orchestrator.apply(
            old_ticket,
            Ok(response(
                "SELECT 1",
                json!({"column_names": ["x"], "results": [{"x": 1}]}),
            )),
        );

        let state = orchestrator.state();
        assert_eq!(state.rows, rows_after_new);
        assert_eq!(state.phase, QueryPhase::Success);
        assert_eq!(
            state.sql_query,
            "SELECT zip_code, median_income_for_workers FROM acs_census_data LIMIT 2"
        );
    }

    #[tokio::test]
    async fn geo_free_result_leaves_camera_alone() {
        let backend = create_mock_backend(vec![Ok(response(
            "SELECT state, population FROM acs_census_data",
            json!({
                "column_names": ["state", "population"],
                "results": [{"state": "CA", "population": 39000000}]
            }),
        ))]);
        let mut orchestrator = Orchestrator::new(backend);

        let phase = orchestrator.submit("population by state").await;
        assert_eq!(phase, QueryPhase::Success);

        let state = orchestrator.state();
        assert_eq!(state.view, crate::view::ViewState::default());
        assert!(state.last_animation.is_none());
        assert!(state.zip_points.is_empty());
        assert_eq!(state.rows.len(), 1);
    }

    #[tokio::test]
    async fn acknowledge_returns_to_idle() {
        let backend = create_mock_backend(vec![Ok(houston_response())]);
        let mut orchestrator = Orchestrator::new(backend);

        orchestrator.submit("richest zip code in Houston").await;
        assert_eq!(orchestrator.state().phase, QueryPhase::Success);

        orchestrator.acknowledge();
        assert_eq!(orchestrator.state().phase, QueryPhase::Idle);
    }
}
