//! TfL Unified API HTTP client.

use reqwest::header::CACHE_CONTROL;

use super::error::TflError;
use super::source::{StatusPayload, StatusSource};
use super::types::parse_line_statuses;

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Optional application key. TfL serves anonymous requests but rate
    /// limits them more aggressively.
    pub app_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config for anonymous access to the production API.
    pub fn new() -> Self {
        Self {
            app_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Authenticate with an application key.
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the TfL line-status endpoint.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    app_key: Option<String>,
}

impl TflClient {
    /// Create a new TfL client.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key,
        })
    }

    /// URL of the status endpoint for the given modes.
    ///
    /// `modes` is interpolated as-is; an unknown mode is reported by TfL as
    /// an API error.
    pub fn status_url(&self, modes: &str) -> String {
        format!("{}/Line/Mode/{}/Status", self.base_url, modes)
    }

    /// Fetch the status of every line in `modes` (comma-separated TfL mode
    /// ids, e.g. `tube,elizabeth-line`).
    ///
    /// The `Cache-Control` header is returned alongside the lines so the
    /// caller can decide when to ask again.
    pub async fn fetch_line_status(&self, modes: &str) -> Result<StatusPayload, TflError> {
        let mut request = self.http.get(self.status_url(modes));
        if let Some(key) = &self.app_key {
            request = request.query(&[("app_key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let cache_control = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;
        let lines = parse_line_statuses(&body)?;

        Ok(StatusPayload {
            lines,
            cache_control,
        })
    }
}

impl StatusSource for TflClient {
    async fn fetch_line_status(&self, modes: &str) -> Result<StatusPayload, TflError> {
        TflClient::fetch_line_status(self, modes).await
    }
}
