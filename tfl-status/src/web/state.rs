//! Application state for the web layer.

use std::sync::Arc;

use crate::status::BoardRegistry;
use crate::tfl::TflSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Self-refreshing boards, one per page configuration
    pub boards: Arc<BoardRegistry<TflSource>>,

    /// How often the page reloads itself, in seconds
    pub page_refresh_secs: u64,
}

impl AppState {
    /// Create a new app state.
    pub fn new(boards: BoardRegistry<TflSource>, page_refresh_secs: u64) -> Self {
        Self {
            boards: Arc::new(boards),
            page_refresh_secs,
        }
    }
}
