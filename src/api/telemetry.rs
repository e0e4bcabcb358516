use chrono::Utc;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

/// Fire-and-forget event capture. Nothing downstream consumes the reply;
/// delivery failures are logged at debug and dropped.
#[derive(Clone)]
pub struct TelemetryClient {
    client: reqwest::Client,
    endpoint: String,
    distinct_id: Uuid,
}

impl TelemetryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            distinct_id: Uuid::new_v4(),
        }
    }

    /// Send one named event without awaiting the outcome.
    pub fn capture(&self, event: &str) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let payload = json!({
            "event": event,
            "distinct_id": self.distinct_id.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        });

        tokio::spawn(async move {
            if let Err(e) = client.post(&endpoint).json(&payload).send().await {
                debug!("telemetry capture failed: {e}");
            }
        });
    }
}
