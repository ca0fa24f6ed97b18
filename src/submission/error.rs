//! Submission failures

use thiserror::Error;

/// Why a send did not land. Callers log these; users never see them.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request to ingestion endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ingestion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// What came back from a successful send
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: u16,
    /// Reply body, when it parsed as JSON
    pub body: Option<serde_json::Value>,
}
