//! Logging setup.

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// How to use the page, logged at startup in development mode.
pub const USAGE: &[&str] = &[
    "Super simple TfL status",
    "Usage instructions:",
    "1. mode: comma-separated TfL modes. Default is \"tube,elizabeth-line\". Recommended list of modes: tube,elizabeth-line,dlr,overground.",
    "   Any value is passed straight to TfL, which may reject it (check the log).",
    "   Example: /?mode=tube",
    "2. names: whether to show line names. Default is false.",
    "   Example: /?names=true",
    "3. The two can be combined.",
    "   Example: /?names=true&mode=tube,elizabeth-line",
];

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();
}

/// Log [`USAGE`] when running in development mode.
pub fn log_usage_instructions(dev_mode: bool) {
    if !dev_mode {
        return;
    }
    for line in USAGE {
        info!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_mentions_both_parameters() {
        assert!(USAGE.iter().any(|l| l.contains("mode=tube")));
        assert!(USAGE.iter().any(|l| l.contains("names=true")));
    }
}
