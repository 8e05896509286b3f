//! The rendered board: the latest set of blocks for one page configuration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::entry::DisplayEntry;

/// What the page shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Blocks, in draw order.
    pub entries: Vec<DisplayEntry>,
    /// When these entries were rendered.
    pub updated_at: DateTime<Utc>,
}

impl BoardSnapshot {
    /// Number of blocks; the page uses it to size them.
    pub fn total_blocks(&self) -> usize {
        self.entries.len()
    }
}

/// Holds the current board.
///
/// Every render replaces the whole board; there is no diffing. Until the
/// first successful fetch the board is empty, and a failed fetch never
/// touches it, so readers always see the last good render.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    current: Arc<RwLock<Option<BoardSnapshot>>>,
}

impl StatusBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board with `entries`.
    pub async fn render(&self, entries: Vec<DisplayEntry>) {
        let snapshot = BoardSnapshot {
            entries,
            updated_at: Utc::now(),
        };

        let mut guard = self.current.write().await;
        *guard = Some(snapshot);
    }

    /// The last rendered board, if anything has been rendered yet.
    pub async fn snapshot(&self) -> Option<BoardSnapshot> {
        let guard = self.current.read().await;
        guard.clone()
    }

    /// Number of blocks on the board (zero before the first render).
    pub async fn total_blocks(&self) -> usize {
        let guard = self.current.read().await;
        guard.as_ref().map_or(0, BoardSnapshot::total_blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let board = StatusBoard::new();
        assert!(board.snapshot().await.is_none());
        assert_eq!(board.total_blocks().await, 0);
    }

    #[tokio::test]
    async fn render_replaces_everything() {
        let board = StatusBoard::new();

        board
            .render(vec![
                DisplayEntry::all_lines_good(),
                DisplayEntry::other_lines_good(),
            ])
            .await;
        assert_eq!(board.total_blocks().await, 2);

        board.render(vec![DisplayEntry::all_lines_good()]).await;
        let snapshot = board.snapshot().await.unwrap();
        assert_eq!(snapshot.entries, vec![DisplayEntry::all_lines_good()]);
        assert_eq!(snapshot.total_blocks(), 1);
    }

    #[tokio::test]
    async fn clones_share_the_board() {
        let board = StatusBoard::new();
        let reader = board.clone();

        board.render(vec![DisplayEntry::all_lines_good()]).await;
        assert_eq!(reader.total_blocks().await, 1);
    }
}
