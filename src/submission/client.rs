//! HTTP client for the ingestion proxy
//!
//! Records are POSTed as JSON to a single endpoint. There is no auth, no
//! timeout and no retry; the proxy upserts rows by email.

use super::error::{SubmissionError, SubmissionReceipt};
use super::payload::Submission;
use super::traits::SubmissionClientTrait;
use async_trait::async_trait;
use tracing::debug;

/// Default endpoint, a locally running proxy
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/waitlist";

pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClientTrait for HttpSubmissionClient {
    async fn send(&self, submission: Submission) -> Result<SubmissionReceipt, SubmissionError> {
        debug!(kind = %submission.kind(), endpoint = %self.endpoint, "Sending submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body = match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Reply was not JSON: {}", e);
                None
            }
        };

        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
