//! Page configuration.

use serde::Serialize;

/// Modes shown when the page doesn't ask for any.
pub const DEFAULT_MODES: &str = "tube,elizabeth-line";

/// Which board a page wants: the modes to ask TfL about, and whether to
/// label blocks with line names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewConfig {
    /// Comma-separated TfL mode ids, passed to the API as-is.
    pub modes: String,
    /// Whether blocks carry line names.
    pub show_names: bool,
}

impl ViewConfig {
    /// Create a config directly.
    pub fn new(modes: impl Into<String>, show_names: bool) -> Self {
        Self {
            modes: modes.into(),
            show_names,
        }
    }

    /// Build a config from the page's `mode` and `names` query parameters.
    ///
    /// `mode` is trimmed; if that leaves nothing, [`DEFAULT_MODES`] is used.
    /// Anything else is passed through untouched, so an unknown mode shows
    /// up as an error from TfL rather than being silently dropped. Names
    /// are shown only for `names=true`.
    pub fn from_query(mode: Option<&str>, names: Option<&str>) -> Self {
        let modes = mode
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODES);

        Self::new(modes, names == Some("true"))
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODES, false)
    }
}
