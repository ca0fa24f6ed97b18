//! Trait abstraction for the submission client to enable mocking in tests

use super::error::{SubmissionError, SubmissionReceipt};
use super::payload::Submission;
use async_trait::async_trait;

/// Sends captured records to the ingestion endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// POST one record. No retries; the caller decides what a failure means.
    async fn send(&self, submission: Submission) -> Result<SubmissionReceipt, SubmissionError>;
}
