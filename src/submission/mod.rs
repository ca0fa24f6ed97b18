//! Submission module for the external ingestion endpoint

mod client;
mod error;
mod payload;
mod traits;

pub use client::{HttpSubmissionClient, DEFAULT_ENDPOINT};
pub use error::{SubmissionError, SubmissionReceipt};
pub use payload::{InterestPayload, LeadPayload, Submission};
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
