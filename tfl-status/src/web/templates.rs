//! Askama templates for the status page.

use askama::Template;
use chrono::Local;

use crate::status::{BoardSnapshot, DisplayEntry};

/// The status page: one coloured block per entry.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub blocks: Vec<BlockView>,
    pub total_blocks: usize,
    pub page_refresh_secs: u64,
    pub updated_at: Option<String>,
}

impl StatusTemplate {
    /// Build the page for a board. An empty board renders a blank page.
    pub fn new(snapshot: Option<&BoardSnapshot>, page_refresh_secs: u64) -> Self {
        let blocks: Vec<BlockView> = snapshot
            .map(|s| s.entries.iter().map(BlockView::from_entry).collect())
            .unwrap_or_default();

        Self {
            total_blocks: blocks.len(),
            blocks,
            page_refresh_secs,
            updated_at: snapshot.map(|s| {
                s.updated_at
                    .with_timezone(&Local)
                    .format("%H:%M:%S")
                    .to_string()
            }),
        }
    }
}

/// One block on the page.
#[derive(Debug, Clone)]
pub struct BlockView {
    pub message: String,
    pub background: String,
    pub striped: bool,
}

impl BlockView {
    /// Create from a display entry.
    pub fn from_entry(entry: &DisplayEntry) -> Self {
        Self {
            message: entry.message.clone(),
            background: entry.background_colour.to_string(),
            striped: entry.striped,
        }
    }

    /// CSS classes for the block.
    pub fn class(&self) -> &'static str {
        if self.striped {
            "status-block striped"
        } else {
            "status-block"
        }
    }
}
