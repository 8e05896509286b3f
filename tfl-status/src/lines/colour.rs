//! Hex RGB colour type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour: {reason}")]
pub struct InvalidColour {
    reason: &'static str,
}

/// An RGB colour, written as `#RRGGBB`.
///
/// Any `HexColour` value is a valid CSS colour by construction, so it can be
/// dropped straight into a `style` attribute.
///
/// # Examples
///
/// ```
/// use tfl_status::lines::HexColour;
///
/// let central = HexColour::parse("#E1251B").unwrap();
/// assert_eq!(central.to_string(), "#E1251B");
///
/// // Lowercase digits are accepted and normalised
/// assert_eq!(HexColour::parse("#e1251b").unwrap(), central);
///
/// // Short forms and missing hashes are rejected
/// assert!(HexColour::parse("#FFF").is_err());
/// assert!(HexColour::parse("E1251B").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColour([u8; 3]);

impl HexColour {
    /// Black, used for lines without a registered style.
    pub const BLACK: HexColour = HexColour::rgb(0x00, 0x00, 0x00);

    /// Build a colour from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        HexColour([r, g, b])
    }

    /// Parse a `#RRGGBB` string (hex digits in either case).
    pub fn parse(s: &str) -> Result<Self, InvalidColour> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(InvalidColour {
                reason: "must start with '#'",
            });
        };

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColour {
                reason: "must contain only hex digits",
            });
        }

        if digits.len() != 6 {
            return Err(InvalidColour {
                reason: "must have exactly 6 hex digits",
            });
        }

        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let pair = &digits[i * 2..i * 2 + 2];
            *channel = u8::from_str_radix(pair, 16).map_err(|_| InvalidColour {
                reason: "must contain only hex digits",
            })?;
        }

        Ok(HexColour(channels))
    }

    /// The red, green and blue channels.
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Debug for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColour({self})")
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl Serialize for HexColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
