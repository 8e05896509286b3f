//! Line presentation styles.

use std::collections::HashMap;

use super::colour::HexColour;

/// How a line is drawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    /// Background colour of the line's block.
    pub colour: HexColour,
    /// Whether the block is drawn with stripes (used for the Overground
    /// sub-lines, which share a livery and are told apart by pattern).
    pub striped: bool,
}

impl LineStyle {
    /// Style used for lines the registry doesn't know about.
    pub const FALLBACK: LineStyle = LineStyle::solid(HexColour::BLACK);

    /// A solid block in the given colour.
    pub const fn solid(colour: HexColour) -> Self {
        Self {
            colour,
            striped: false,
        }
    }

    /// A striped block in the given colour.
    pub const fn striped(colour: HexColour) -> Self {
        Self {
            colour,
            striped: true,
        }
    }
}

/// Colours from the TfL colour standard (issue 08), plus the London
/// Overground line names introduced in 2024.
const LONDON_LINES: &[(&str, LineStyle)] = &[
    ("Bakerloo", LineStyle::solid(HexColour::rgb(0xA6, 0x5A, 0x2A))),
    ("Central", LineStyle::solid(HexColour::rgb(0xE1, 0x25, 0x1B))),
    ("Circle", LineStyle::solid(HexColour::rgb(0xFF, 0xCD, 0x00))),
    ("District", LineStyle::solid(HexColour::rgb(0x00, 0x79, 0x34))),
    ("Hammersmith & City", LineStyle::solid(HexColour::rgb(0xEC, 0x9B, 0xAD))),
    ("Jubilee", LineStyle::solid(HexColour::rgb(0x7B, 0x86, 0x8C))),
    ("Metropolitan", LineStyle::solid(HexColour::rgb(0x87, 0x0F, 0x54))),
    ("Northern", LineStyle::solid(HexColour::rgb(0x00, 0x00, 0x00))),
    ("Piccadilly", LineStyle::solid(HexColour::rgb(0x00, 0x0F, 0x9F))),
    ("Victoria", LineStyle::solid(HexColour::rgb(0x00, 0xA0, 0xDF))),
    ("Waterloo & City", LineStyle::solid(HexColour::rgb(0x6B, 0xCD, 0xB2))),
    ("Transport for London", LineStyle::solid(HexColour::rgb(0x00, 0x0F, 0x9F))),
    ("DLR", LineStyle::solid(HexColour::rgb(0x00, 0xAF, 0xAA))),
    ("Elizabeth line", LineStyle::solid(HexColour::rgb(0x77, 0x3D, 0xBD))),
    ("London Overground", LineStyle::solid(HexColour::rgb(0xEE, 0x76, 0x23))),
    ("Liberty", LineStyle::striped(HexColour::rgb(0x61, 0x68, 0x6B))),
    ("Lioness", LineStyle::striped(HexColour::rgb(0xFF, 0xA6, 0x00))),
    ("Mildmay", LineStyle::striped(HexColour::rgb(0x00, 0x6F, 0xE6))),
    ("Suffragette", LineStyle::striped(HexColour::rgb(0x18, 0xA9, 0x5D))),
    ("Weaver", LineStyle::striped(HexColour::rgb(0x9B, 0x00, 0x58))),
    ("Windrush", LineStyle::striped(HexColour::rgb(0xDC, 0x24, 0x1F))),
];

/// Read-only mapping from line name to presentation style.
///
/// Built once at startup and shared (behind an `Arc`) with everything that
/// needs to colour a line. Lookups never fail: unknown names resolve to
/// [`LineStyle::FALLBACK`].
#[derive(Debug, Clone)]
pub struct LineStyles {
    styles: HashMap<String, LineStyle>,
}

impl LineStyles {
    /// Build a registry from `(line name, style)` pairs.
    ///
    /// Later pairs win if a name appears twice.
    pub fn new<I, N>(styles: I) -> Self
    where
        I: IntoIterator<Item = (N, LineStyle)>,
        N: Into<String>,
    {
        Self {
            styles: styles
                .into_iter()
                .map(|(name, style)| (name.into(), style))
                .collect(),
        }
    }

    /// The registry for London's Underground, DLR, Elizabeth line and
    /// Overground.
    pub fn london() -> Self {
        Self::new(LONDON_LINES.iter().copied())
    }

    /// Look up a line's registered style.
    pub fn get(&self, line_name: &str) -> Option<&LineStyle> {
        self.styles.get(line_name)
    }

    /// Style for a line, falling back to [`LineStyle::FALLBACK`].
    pub fn resolve(&self, line_name: &str) -> LineStyle {
        self.get(line_name).copied().unwrap_or(LineStyle::FALLBACK)
    }

    /// Number of registered lines.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for LineStyles {
    fn default() -> Self {
        Self::london()
    }
}
