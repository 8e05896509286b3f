//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::status::RegistryConfig;
use crate::tfl::TflConfig;

/// Default listen address.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// Default browser reload period for the status page.
const DEFAULT_PAGE_REFRESH_SECS: u64 = 60;

/// Default location of the stylesheet directory.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`TFL_STATUS_ADDR`).
    pub addr: SocketAddr,

    /// TfL client settings (`TFL_BASE_URL`, `TFL_APP_KEY`, `TFL_TIMEOUT_SECS`).
    pub tfl: TflConfig,

    /// Board polling settings (`TFL_MAX_VIEWS`, `TFL_VIEW_IDLE_SECS`,
    /// `TFL_FALLBACK_SECS`).
    pub registry: RegistryConfig,

    /// How often the page reloads itself (`TFL_PAGE_REFRESH_SECS`).
    pub page_refresh_secs: u64,

    /// Stylesheet directory (`TFL_STATIC_DIR`).
    pub static_dir: PathBuf,

    /// Serve this payload instead of calling TfL (`TFL_MOCK_FILE`).
    pub mock_file: Option<PathBuf>,

    /// Log usage instructions at startup (`TFL_STATUS_DEV`).
    pub dev_mode: bool,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr = parse_or(&get, "TFL_STATUS_ADDR", "a socket address like 127.0.0.1:3000")?
            .unwrap_or(DEFAULT_ADDR);

        let mut tfl = TflConfig::new();
        if let Some(url) = get("TFL_BASE_URL") {
            tfl = tfl.with_base_url(url);
        }
        if let Some(key) = get("TFL_APP_KEY") {
            tfl = tfl.with_app_key(key);
        }
        if let Some(secs) = parse_or(&get, "TFL_TIMEOUT_SECS", "a number of seconds")? {
            tfl = tfl.with_timeout(secs);
        }

        let mut registry = RegistryConfig::default();
        if let Some(n) = parse_or(&get, "TFL_MAX_VIEWS", "a number")? {
            registry.max_views = n;
        }
        if let Some(secs) = parse_or(&get, "TFL_VIEW_IDLE_SECS", "a number of seconds")? {
            registry.idle = Duration::from_secs(secs);
        }
        let fallback_secs: Option<u64> = parse_or(&get, "TFL_FALLBACK_SECS", "a number of seconds")?;
        if let Some(secs) = fallback_secs {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "TFL_FALLBACK_SECS",
                    value: secs.to_string(),
                    expected: "at least 1 second",
                });
            }
            registry.fallback = Duration::from_secs(secs);
        }

        let page_refresh_secs = parse_or(&get, "TFL_PAGE_REFRESH_SECS", "a number of seconds")?
            .unwrap_or(DEFAULT_PAGE_REFRESH_SECS);

        let dev_mode = match get("TFL_STATUS_DEV").as_deref() {
            None | Some("0" | "false") => false,
            Some("1" | "true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "TFL_STATUS_DEV",
                    value: other.to_string(),
                    expected: "one of 1, true, 0, false",
                });
            }
        };

        Ok(Self {
            addr,
            tfl,
            registry,
            page_refresh_secs,
            static_dir: get("TFL_STATIC_DIR").map_or_else(|| DEFAULT_STATIC_DIR.into(), PathBuf::from),
            mock_file: get("TFL_MOCK_FILE").map(PathBuf::from),
            dev_mode,
        })
    }
}

/// Parse `var` if it's set.
fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(var)
        .map(|value| {
            value.trim().parse().map_err(|_| ConfigError::Invalid {
                var,
                value,
                expected,
            })
        })
        .transpose()
}
