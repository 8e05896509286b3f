//! Line presentation: colours and the style registry.

mod colour;
mod style;

pub use colour::{HexColour, InvalidColour};
pub use style::{LineStyle, LineStyles};
