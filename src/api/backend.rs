use super::response::ApiResponse;
use crate::error::{CensusqError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://ama-api.onrender.com";

#[derive(Serialize)]
struct QueryPayload<'a> {
    natural_language_query: &'a str,
}

/// Seam between the orchestrator and the remote text-to-SQL service.
#[async_trait]
pub trait TextToSqlBackend: Send + Sync {
    async fn text_to_sql(&self, natural_language_query: &str) -> Result<ApiResponse>;
}

/// Backend talking to the real text-to-SQL API over HTTP.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/api/text_to_sql", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextToSqlBackend for HttpBackend {
    async fn text_to_sql(&self, natural_language_query: &str) -> Result<ApiResponse> {
        let payload = QueryPayload {
            natural_language_query,
        };

        let response = self
            .client
            .post(self.url())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CensusqError::Api(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received text-to-sql response");
        let parsed: ApiResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

/// In-memory backend for tests and offline runs. Replies are served in
/// insertion order; an exhausted queue reports a 500.
#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    received: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn with_responses(responses: Vec<Result<ApiResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, response: Result<ApiResponse>) {
        self.responses
            .lock()
            .expect("mock backend lock poisoned")
            .push_back(response);
    }

    /// Queries received so far, in submission order.
    pub fn received_queries(&self) -> Vec<String> {
        self.received
            .lock()
            .expect("mock backend lock poisoned")
            .clone()
    }
}

#[async_trait]
impl TextToSqlBackend for MockBackend {
    async fn text_to_sql(&self, natural_language_query: &str) -> Result<ApiResponse> {
        self.received
            .lock()
            .expect("mock backend lock poisoned")
            .push(natural_language_query.to_string());

        self.responses
            .lock()
            .expect("mock backend lock poisoned")
            .pop_front()
            .unwrap_or(Err(CensusqError::Api(500)))
    }
}

pub fn create_http_backend(endpoint: impl Into<String>) -> Arc<dyn TextToSqlBackend> {
    Arc::new(HttpBackend::new(endpoint))
}

pub fn create_mock_backend(responses: Vec<Result<ApiResponse>>) -> Arc<MockBackend> {
    Arc::new(MockBackend::with_responses(responses))
}
