//! One fetch of the status board: request, classify, and read the refresh
//! hint.

use std::sync::Arc;

use tracing::debug;

use crate::lines::LineStyles;
use crate::tfl::{StatusSource, TflError, extract_max_age};

use super::classify::classify;
use super::entry::DisplayEntry;

/// A successfully fetched board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Blocks to draw, in order.
    pub entries: Vec<DisplayEntry>,
    /// Seconds until TfL expects the data to change, from `max-age`.
    pub max_age: Option<u64>,
}

/// Fetches line statuses and turns them into display entries.
///
/// Shared by every poller; holds no per-board state.
#[derive(Debug)]
pub struct StatusFetcher<S> {
    source: S,
    styles: Arc<LineStyles>,
}

impl<S: StatusSource> StatusFetcher<S> {
    /// Create a fetcher over `source`, colouring lines from `styles`.
    pub fn new(source: S, styles: Arc<LineStyles>) -> Self {
        Self { source, styles }
    }

    /// The style registry in use.
    pub fn styles(&self) -> &LineStyles {
        &self.styles
    }

    /// Fetch the board for `modes`.
    ///
    /// Transport failures and unreadable bodies come back as `Err`; the
    /// caller decides whether to keep showing the previous board.
    pub async fn fetch_status(
        &self,
        modes: &str,
        show_names: bool,
    ) -> Result<StatusUpdate, TflError> {
        let payload = self.source.fetch_line_status(modes).await?;
        let max_age = extract_max_age(payload.cache_control.as_deref());

        let classification = classify(&payload.lines, &self.styles, show_names);
        debug!(
            modes,
            lines = payload.lines.len(),
            disrupted = classification.disrupted.len(),
            ?max_age,
            "fetched line status"
        );

        Ok(StatusUpdate {
            entries: classification.into_entries(show_names),
            max_age,
        })
    }
}
