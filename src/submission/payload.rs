//! JSON bodies sent to the ingestion endpoint
//!
//! Field names are camelCase on the wire. Optional answers that are absent
//! or blank serialize as `null` rather than being omitted, so the remote
//! sheet always sees the full column set.

use crate::state::{FormFields, Step};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// `source` tag for the register-interest page
pub const INTEREST_SOURCE: &str = "register-interest";

/// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T09:30:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wizard record, keyed upstream by email
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub email: String,
    pub step_completed: u8,
    pub timestamp: String,
    pub current_price: Option<f64>,
    pub weekly_volume: Option<u64>,
    pub price_increase: u32,
    pub retention: u32,
    pub current_annual: i64,
    pub new_annual: i64,
    pub uplift: i64,
    pub mobile: Option<String>,
    #[serde(rename = "clientOrSP")]
    pub client_or_sp: Option<String>,
    pub current_system: Option<String>,
    pub current_challenges: Option<String>,
    pub dynamic_booking_appeal: u8,
    pub revenue_sharing: Option<String>,
    pub desired_features: Option<String>,
}

impl LeadPayload {
    /// Snapshot the answers. Revenue figures are recomputed here, never cached.
    pub fn from_fields(fields: &FormFields, step_completed: Step, at: DateTime<Utc>) -> Self {
        let projection = fields.projection();
        Self {
            email: fields.email.value().trim().to_string(),
            step_completed: step_completed.number(),
            timestamp: iso_timestamp(at),
            current_price: fields.price_number(),
            weekly_volume: fields.weekly_volume.value().trim().parse().ok(),
            price_increase: fields.price_increase,
            retention: fields.retention,
            current_annual: projection.current_annual,
            new_annual: projection.new_annual,
            uplift: projection.uplift,
            mobile: fields.mobile.formatted(),
            client_or_sp: fields.role.map(|r| r.label().to_string()),
            current_system: fields.current_system.non_empty(),
            current_challenges: fields.current_challenges.non_empty(),
            dynamic_booking_appeal: fields.dynamic_booking_appeal,
            revenue_sharing: fields.revenue_sharing.map(|r| r.as_str().to_string()),
            desired_features: fields.desired_features.non_empty(),
        }
    }
}

/// Register-interest record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestPayload {
    pub email: String,
    pub source: &'static str,
    pub timestamp: String,
}

impl InterestPayload {
    pub fn new(email: &str, at: DateTime<Utc>) -> Self {
        Self {
            email: email.trim().to_string(),
            source: INTEREST_SOURCE,
            timestamp: iso_timestamp(at),
        }
    }
}

/// Anything the client can send
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Lead(LeadPayload),
    Interest(InterestPayload),
}

impl Submission {
    pub fn email(&self) -> &str {
        match self {
            Submission::Lead(p) => &p.email,
            Submission::Interest(p) => &p.email,
        }
    }

    /// Short label for log lines
    pub fn kind(&self) -> String {
        match self {
            Submission::Lead(p) => format!("lead/step-{}", p.step_completed),
            Submission::Interest(_) => INTEREST_SOURCE.to_string(),
        }
    }
}
