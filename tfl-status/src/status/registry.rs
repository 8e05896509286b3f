//! Boards for every page configuration currently being viewed.
//!
//! Each distinct `ViewConfig` gets its own [`ViewPoller`], created on first
//! request. The set is bounded and pollers nobody has asked for in a while
//! are dropped, which also stops their timers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::tfl::StatusSource;

use super::fetch::StatusFetcher;
use super::poller::ViewPoller;
use super::schedule::DEFAULT_FALLBACK;
use super::view::ViewConfig;

/// Configuration for the board registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of boards polled at once.
    pub max_views: u64,

    /// Drop a board after it hasn't been requested for this long.
    pub idle: Duration,

    /// Period of each board's fallback refresh.
    pub fallback: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_views: 32,
            idle: Duration::from_secs(60 * 60),
            fallback: DEFAULT_FALLBACK,
        }
    }
}

/// Lazily created, self-refreshing boards keyed by page configuration.
pub struct BoardRegistry<S> {
    fetcher: Arc<StatusFetcher<S>>,
    pollers: MokaCache<ViewConfig, Arc<ViewPoller<S>>>,
    fallback: Duration,
}

impl<S: StatusSource> BoardRegistry<S> {
    /// Create an empty registry.
    pub fn new(fetcher: StatusFetcher<S>, config: &RegistryConfig) -> Self {
        let pollers = MokaCache::builder()
            .max_capacity(config.max_views)
            .time_to_idle(config.idle)
            .build();

        Self {
            fetcher: Arc::new(fetcher),
            pollers,
            fallback: config.fallback,
        }
    }

    /// The poller for `view`, starting one if needed.
    ///
    /// A new poller fetches its first board before this returns, so the
    /// first page load shows real data when TfL is reachable. Concurrent
    /// first requests for the same view share that one fetch.
    pub async fn poller(&self, view: ViewConfig) -> Arc<ViewPoller<S>> {
        let fetcher = self.fetcher.clone();
        let fallback = self.fallback;

        self.pollers
            .get_with(view.clone(), async move {
                let poller = ViewPoller::new(view, fetcher, fallback);
                poller.start().await;
                poller
            })
            .await
    }

    /// Number of boards currently held (approximate, as eviction is lazy).
    pub fn view_count(&self) -> u64 {
        self.pollers.entry_count()
    }
}
