//! TfL status board server.
//!
//! Polls the TfL line-status API and serves a minimal colour-coded page:
//! one block per disrupted line, or a single blue block when everything
//! is running normally.

pub mod config;
pub mod lines;
pub mod status;
pub mod telemetry;
pub mod tfl;
pub mod web;
