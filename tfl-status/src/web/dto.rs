//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{BoardSnapshot, DisplayEntry, ViewConfig};

/// Query string accepted by the page and the JSON endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// Comma-separated TfL modes (e.g., "tube,dlr")
    pub mode: Option<String>,

    /// "true" to label blocks with line names
    pub names: Option<String>,
}

impl StatusQuery {
    /// The board this query asks for.
    pub fn view(&self) -> ViewConfig {
        ViewConfig::from_query(self.mode.as_deref(), self.names.as_deref())
    }
}

/// Current board, as JSON.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Modes the board covers
    pub modes: String,

    /// Whether blocks carry line names
    pub show_names: bool,

    /// When the board was last rendered (null before the first success)
    pub updated_at: Option<DateTime<Utc>>,

    /// Number of blocks
    pub total_blocks: usize,

    /// Blocks, in draw order
    pub entries: Vec<DisplayEntry>,
}

impl StatusResponse {
    /// Build a response for `view` from its latest snapshot.
    pub fn new(view: &ViewConfig, snapshot: Option<BoardSnapshot>) -> Self {
        let (updated_at, entries) = match snapshot {
            Some(s) => (Some(s.updated_at), s.entries),
            None => (None, Vec::new()),
        };

        Self {
            modes: view.modes.clone(),
            show_names: view.show_names,
            updated_at,
            total_blocks: entries.len(),
            entries,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_to_view() {
        let query = StatusQuery {
            mode: Some(" dlr ".into()),
            names: Some("true".into()),
        };
        assert_eq!(query.view(), ViewConfig::new("dlr", true));

        assert_eq!(StatusQuery::default().view(), ViewConfig::default());
    }

    #[test]
    fn empty_board_response() {
        let response = StatusResponse::new(&ViewConfig::default(), None);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "modes": "tube,elizabeth-line",
                "show_names": false,
                "updated_at": null,
                "total_blocks": 0,
                "entries": [],
            })
        );
    }

    #[test]
    fn rendered_board_response() {
        let snapshot = BoardSnapshot {
            entries: vec![DisplayEntry::all_lines_good()],
            updated_at: Utc::now(),
        };
        let response = StatusResponse::new(&ViewConfig::new("tube", true), Some(snapshot));

        assert_eq!(response.total_blocks, 1);
        assert!(response.updated_at.is_some());
        assert_eq!(response.entries[0].message, "Good service on all lines");
    }
}
