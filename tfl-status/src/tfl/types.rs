//! TfL Unified API response DTOs.
//!
//! Only the fields the status board needs are modelled; serde ignores the
//! rest of TfL's (rather large) line objects.

use serde::{Deserialize, Serialize};

use super::error::TflError;

/// Severity TfL reports for "Good Service". Anything lower is a disruption.
pub const GOOD_SERVICE: i32 = 10;

/// Status of one line, as returned by `/Line/Mode/{modes}/Status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusRecord {
    /// Line identifier (e.g., "waterloo-city").
    pub id: Option<String>,

    /// Human-readable line name (e.g., "Waterloo & City").
    pub name: String,

    /// Transport mode (e.g., "tube").
    pub mode_name: Option<String>,

    /// Current statuses. A line can carry several at once, e.g. a planned
    /// closure alongside minor delays on the open section.
    pub line_statuses: Vec<LineStatus>,
}

impl LineStatusRecord {
    /// All reported severities, in API order.
    pub fn severities(&self) -> impl Iterator<Item = i32> + '_ {
        self.line_statuses.iter().map(|s| s.status_severity)
    }

    /// Whether any reported status is worse than good service.
    pub fn is_disrupted(&self) -> bool {
        self.severities().any(|severity| severity < GOOD_SERVICE)
    }
}

/// One status entry for a line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    /// Numeric severity; lower is worse, 10 is good service.
    pub status_severity: i32,

    /// Description such as "Minor Delays".
    pub status_severity_description: Option<String>,

    /// Free-text explanation of the disruption.
    pub reason: Option<String>,
}

/// Parse a line-status response body.
pub fn parse_line_statuses(body: &str) -> Result<Vec<LineStatusRecord>, TflError> {
    serde_json::from_str(body).map_err(|e| TflError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
