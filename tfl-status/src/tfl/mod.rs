//! TfL Unified API client.
//!
//! Fetches line statuses from `/Line/Mode/{modes}/Status`. The response is a
//! JSON array with one object per line; each line carries one or more
//! statuses with a numeric severity (10 is good service, lower is worse).
//! The `Cache-Control` header's `max-age` says how long TfL expects the data
//! to stay fresh, which we use as the refresh hint.

mod cache_control;
mod client;
mod error;
mod mock;
mod source;
mod types;

pub use cache_control::extract_max_age;
pub use client::{TflClient, TflConfig};
pub use error::{FailureKind, TflError};
pub use mock::MockTflClient;
pub use source::{StatusPayload, StatusSource, TflSource};
pub use types::{GOOD_SERVICE, LineStatus, LineStatusRecord, parse_line_statuses};
