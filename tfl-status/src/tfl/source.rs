//! Where line statuses come from.

use std::future::Future;

use super::client::TflClient;
use super::error::TflError;
use super::mock::MockTflClient;
use super::types::LineStatusRecord;

/// One response's worth of line statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPayload {
    /// Lines in the order the API returned them.
    pub lines: Vec<LineStatusRecord>,
    /// Raw `Cache-Control` header, if the response had one.
    pub cache_control: Option<String>,
}

/// Something that can answer "what is the status of these modes?".
///
/// Implemented by the live client, the file-backed mock, and by test fakes.
pub trait StatusSource: Send + Sync + 'static {
    /// Fetch the status of every line in `modes`.
    fn fetch_line_status(
        &self,
        modes: &str,
    ) -> impl Future<Output = Result<StatusPayload, TflError>> + Send;
}

/// The status source chosen at startup.
#[derive(Debug, Clone)]
pub enum TflSource {
    /// The real TfL API.
    Live(TflClient),
    /// A fixed payload loaded from disk.
    Mock(MockTflClient),
}

impl StatusSource for TflSource {
    async fn fetch_line_status(&self, modes: &str) -> Result<StatusPayload, TflError> {
        match self {
            TflSource::Live(client) => client.fetch_line_status(modes).await,
            TflSource::Mock(mock) => mock.fetch_line_status(modes).await,
        }
    }
}
