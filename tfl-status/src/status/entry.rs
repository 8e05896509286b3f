//! Display entries: what the board actually draws.

use serde::Serialize;

use crate::lines::{HexColour, LineStyle};

/// Background of the "good service" blocks (TfL corporate blue).
pub const GOOD_SERVICE_COLOUR: HexColour = HexColour::rgb(0x00, 0x4A, 0x9C);

/// Message shown when nothing is disrupted.
pub const ALL_LINES_GOOD: &str = "Good service on all lines";

/// Message appended after the disrupted lines when names are shown.
pub const OTHER_LINES_GOOD: &str = "Good service on all other lines";

/// One coloured block on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    /// Text inside the block. Empty when line names are hidden.
    pub message: String,
    /// Block background.
    pub background_colour: HexColour,
    /// Whether the block is drawn with stripes.
    pub striped: bool,
}

impl DisplayEntry {
    /// A block styled as a particular line.
    pub fn styled(message: impl Into<String>, style: LineStyle) -> Self {
        Self {
            message: message.into(),
            background_colour: style.colour,
            striped: style.striped,
        }
    }

    /// The single block shown when every line has good service.
    pub fn all_lines_good() -> Self {
        Self::styled(ALL_LINES_GOOD, LineStyle::solid(GOOD_SERVICE_COLOUR))
    }

    /// The trailing block shown after the disrupted lines.
    pub fn other_lines_good() -> Self {
        Self::styled(OTHER_LINES_GOOD, LineStyle::solid(GOOD_SERVICE_COLOUR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_service_entries() {
        let all = DisplayEntry::all_lines_good();
        assert_eq!(all.message, "Good service on all lines");
        assert_eq!(all.background_colour.to_string(), "#004A9C");
        assert!(!all.striped);

        let others = DisplayEntry::other_lines_good();
        assert_eq!(others.message, "Good service on all other lines");
        assert_eq!(others.background_colour, GOOD_SERVICE_COLOUR);
        assert!(!others.striped);
    }

    #[test]
    fn serializes_colour_as_hex() {
        let json = serde_json::to_value(DisplayEntry::all_lines_good()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Good service on all lines",
                "background_colour": "#004A9C",
                "striped": false,
            })
        );
    }
}
