//! Mock TfL client for running without network access.
//!
//! Serves a single line-status payload from a JSON file, whatever modes are
//! asked for. Handy for working on the page layout without waiting for a
//! real disruption.

use std::path::Path;
use std::sync::Arc;

use super::error::TflError;
use super::source::{StatusPayload, StatusSource};
use super::types::{LineStatusRecord, parse_line_statuses};

/// `Cache-Control` the mock reports unless told otherwise.
const DEFAULT_CACHE_CONTROL: &str = "public, must-revalidate, max-age=30";

/// Mock TfL client that serves data from a JSON file.
#[derive(Debug, Clone)]
pub struct MockTflClient {
    lines: Arc<Vec<LineStatusRecord>>,
    cache_control: Option<String>,
}

impl MockTflClient {
    /// Load a payload from a JSON file shaped like TfL's
    /// `/Line/Mode/{modes}/Status` response.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TflError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| TflError::Mock {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let lines = parse_line_statuses(&json).map_err(|e| TflError::Mock {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

        Ok(Self {
            lines: Arc::new(lines),
            cache_control: Some(DEFAULT_CACHE_CONTROL.to_string()),
        })
    }

    /// Report a different `Cache-Control` header (or none).
    pub fn with_cache_control(mut self, header: Option<&str>) -> Self {
        self.cache_control = header.map(str::to_string);
        self
    }

    /// Number of lines in the payload.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl StatusSource for MockTflClient {
    async fn fetch_line_status(&self, _modes: &str) -> Result<StatusPayload, TflError> {
        Ok(StatusPayload {
            lines: self.lines.as_ref().clone(),
            cache_control: self.cache_control.clone(),
        })
    }
}
