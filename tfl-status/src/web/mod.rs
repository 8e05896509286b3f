//! Web layer for the status board.
//!
//! Serves the colour-coded status page, the same board as JSON, and the
//! page's stylesheet.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
