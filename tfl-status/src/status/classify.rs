//! Disruption classification.
//!
//! Turns the raw per-line statuses into the blocks the board shows:
//! one block per disrupted line, in API order, or a single "good service"
//! block when nothing is wrong.

use crate::lines::LineStyles;
use crate::tfl::LineStatusRecord;

use super::entry::DisplayEntry;

/// Result of scanning a set of lines for disruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// True when no line is disrupted.
    pub all_good: bool,
    /// One entry per disrupted line, in input order.
    pub disrupted: Vec<DisplayEntry>,
}

impl Classification {
    /// The full list of blocks to draw.
    ///
    /// With nothing disrupted this is the single "all lines" block. Otherwise
    /// it's the disrupted lines, followed by an "all other lines" block when
    /// names are shown (without names the extra block would be an unlabelled
    /// blue bar, so it's left off).
    pub fn into_entries(self, show_names: bool) -> Vec<DisplayEntry> {
        if self.all_good {
            return vec![DisplayEntry::all_lines_good()];
        }

        let mut entries = self.disrupted;
        if show_names {
            entries.push(DisplayEntry::other_lines_good());
        }
        entries
    }
}

/// Find the disrupted lines in `records`.
///
/// A line is disrupted if any of its statuses is below good service.
/// Each disrupted line becomes an entry in its registered style (unknown
/// lines get the fallback style), labelled with the line name when
/// `show_names` is set and left blank otherwise.
pub fn classify(
    records: &[LineStatusRecord],
    styles: &LineStyles,
    show_names: bool,
) -> Classification {
    let disrupted: Vec<DisplayEntry> = records
        .iter()
        .filter(|record| record.is_disrupted())
        .map(|record| {
            let message = if show_names { record.name.as_str() } else { "" };
            DisplayEntry::styled(message, styles.resolve(&record.name))
        })
        .collect();

    Classification {
        all_good: disrupted.is_empty(),
        disrupted,
    }
}
