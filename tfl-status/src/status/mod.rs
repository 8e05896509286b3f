//! The status pipeline.
//!
//! Line statuses flow one way: fetched from TfL, classified into display
//! entries, rendered onto a board. The response's `max-age` flows back into
//! the scheduler, which decides when the next fetch happens.

mod board;
mod classify;
mod entry;
mod fetch;
mod poller;
mod registry;
mod schedule;
mod view;

pub use board::{BoardSnapshot, StatusBoard};
pub use classify::{Classification, classify};
pub use entry::{ALL_LINES_GOOD, DisplayEntry, GOOD_SERVICE_COLOUR, OTHER_LINES_GOOD};
pub use fetch::{StatusFetcher, StatusUpdate};
pub use poller::{RefreshOutcome, ViewPoller};
pub use registry::{BoardRegistry, RegistryConfig};
pub use schedule::{DEFAULT_FALLBACK, Refresh, RefreshScheduler, schedule_next, spawn_fallback};
pub use view::{DEFAULT_MODES, ViewConfig};
