//! A self-refreshing board for one page configuration.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::tfl::{FailureKind, StatusSource};

use super::board::StatusBoard;
use super::fetch::StatusFetcher;
use super::schedule::{Refresh, RefreshScheduler, schedule_next, spawn_fallback};
use super::view::ViewConfig;

/// What a single refresh cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The board was redrawn.
    Rendered {
        /// Blocks now on the board.
        blocks: usize,
        /// Delay of the server-driven refresh that was armed, if any.
        next: Option<Duration>,
    },
    /// The fetch failed; the board was left as it was.
    Failed(FailureKind),
    /// Another refresh of this board was already running.
    Skipped,
}

/// Keeps one [`StatusBoard`] up to date.
///
/// Each refresh fetches, renders, and re-arms the server-driven timer from
/// the response's `max-age`. A periodic fallback timer (started by
/// [`ViewPoller::start`]) runs alongside. At most one refresh runs at a
/// time; a timer that fires while one is in flight is skipped, since the
/// running refresh will re-arm anyway.
pub struct ViewPoller<S> {
    view: ViewConfig,
    fetcher: Arc<StatusFetcher<S>>,
    board: StatusBoard,
    scheduler: RefreshScheduler,
    in_flight: Mutex<()>,
    fallback: OnceLock<JoinHandle<()>>,
}

impl<S: StatusSource> ViewPoller<S> {
    /// Create a poller. Nothing is fetched until [`ViewPoller::start`].
    pub fn new(view: ViewConfig, fetcher: Arc<StatusFetcher<S>>, fallback: Duration) -> Arc<Self> {
        Arc::new(Self {
            view,
            fetcher,
            board: StatusBoard::new(),
            scheduler: RefreshScheduler::new(fallback),
            in_flight: Mutex::new(()),
            fallback: OnceLock::new(),
        })
    }

    /// Fetch the first board and start the fallback timer.
    ///
    /// Calling this more than once only refreshes again.
    pub async fn start(self: &Arc<Self>) -> RefreshOutcome {
        info!(
            modes = %self.view.modes,
            show_names = self.view.show_names,
            "starting status board"
        );
        let outcome = self.refresh_now().await;
        self.fallback.get_or_init(|| spawn_fallback(self));
        outcome
    }

    /// Run one refresh cycle now.
    pub async fn refresh_now(self: &Arc<Self>) -> RefreshOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!(modes = %self.view.modes, "refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        };

        match self
            .fetcher
            .fetch_status(&self.view.modes, self.view.show_names)
            .await
        {
            Ok(update) => {
                let blocks = update.entries.len();
                self.board.render(update.entries).await;
                let next = schedule_next(self, update.max_age);
                RefreshOutcome::Rendered { blocks, next }
            }
            Err(e) => {
                error!(modes = %self.view.modes, error = %e, "failed to fetch TfL status");
                RefreshOutcome::Failed(e.kind())
            }
        }
    }

    /// The page configuration this poller serves.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// The board this poller keeps current.
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }
}

impl<S: StatusSource> Refresh for ViewPoller<S> {
    async fn refresh(self: Arc<Self>) {
        self.refresh_now().await;
    }

    fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }
}

impl<S> Drop for ViewPoller<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.fallback.get() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::lines::LineStyles;
    use crate::status::entry::DisplayEntry;
    use crate::tfl::{StatusPayload, TflError, parse_line_statuses};

    const ALL_OK: &str = include_str!("../../data/fixtures/all_ok.json");
    const SINGLE: &str = include_str!("../../data/fixtures/single_disruption.json");

    /// Plays back a script of responses, then repeats the last one.
    struct Scripted {
        script: StdMutex<VecDeque<Result<(&'static str, Option<&'static str>), u16>>>,
        calls: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(
            script: Vec<Result<(&'static str, Option<&'static str>), u16>>,
        ) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                script: StdMutex::new(script.into()),
                calls: calls.clone(),
            };
            (source, calls)
        }
    }

    impl StatusSource for Scripted {
        async fn fetch_line_status(&self, _modes: &str) -> Result<StatusPayload, TflError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let step = {
                let mut script = self.script.lock().unwrap();
                if script.len() > 1 {
                    script.pop_front().unwrap()
                } else {
                    script.front().cloned().unwrap()
                }
            };
            match step {
                Ok((body, cache_control)) => Ok(StatusPayload {
                    lines: parse_line_statuses(body)?,
                    cache_control: cache_control.map(str::to_string),
                }),
                Err(status) => Err(TflError::Api {
                    status,
                    message: String::new(),
                }),
            }
        }
    }

    fn poller(source: Scripted, show_names: bool) -> Arc<ViewPoller<Scripted>> {
        let fetcher = Arc::new(StatusFetcher::new(source, Arc::new(LineStyles::london())));
        ViewPoller::new(
            ViewConfig::new("tube", show_names),
            fetcher,
            Duration::from_secs(300),
        )
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(secs: u64) {
        tokio::time::advance(Duration::from_secs(secs)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn start_renders_and_arms_from_max_age() {
        let (source, calls) = Scripted::new(vec![Ok((SINGLE, Some("public, max-age=30")))]);
        let poller = poller(source, true);

        let outcome = poller.start().await;
        assert_eq!(
            outcome,
            RefreshOutcome::Rendered {
                blocks: 2,
                next: Some(Duration::from_secs(30)),
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let snapshot = poller.board().snapshot().await.unwrap();
        assert_eq!(snapshot.entries[0].message, "Waterloo & City");
        assert_eq!(snapshot.entries[1], DisplayEntry::other_lines_good());

        settle().await;
        advance(30).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn no_max_age_relies_on_fallback() {
        let (source, calls) = Scripted::new(vec![Ok((ALL_OK, None))]);
        let poller = poller(source, false);

        let outcome = poller.start().await;
        assert_eq!(outcome, RefreshOutcome::Rendered { blocks: 1, next: None });
        settle().await;

        advance(299).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        advance(1).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_keeps_previous_board() {
        let (source, _calls) = Scripted::new(vec![Ok((SINGLE, None)), Err(503)]);
        let poller = poller(source, true);

        poller.start().await;
        let before = poller.board().snapshot().await.unwrap();

        let outcome = poller.refresh_now().await;
        assert_eq!(outcome, RefreshOutcome::Failed(FailureKind::Transport));
        assert_eq!(poller.board().snapshot().await.unwrap(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn first_failure_leaves_board_empty() {
        let (source, calls) = Scripted::new(vec![Err(500), Ok((ALL_OK, None))]);
        let poller = poller(source, true);

        assert_eq!(
            poller.start().await,
            RefreshOutcome::Failed(FailureKind::Transport)
        );
        assert!(poller.board().snapshot().await.is_none());
        settle().await;

        // The fallback timer tries again
        advance(300).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(poller.board().total_blocks().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_body_is_reported() {
        let (source, _calls) = Scripted::new(vec![Ok(("{\"oops\": true}", None))]);
        let poller = poller(source, true);

        assert_eq!(
            poller.refresh_now().await,
            RefreshOutcome::Failed(FailureKind::MalformedResponse)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_refresh_is_skipped() {
        let (source, _calls) = Scripted::new(vec![Ok((ALL_OK, None))]);
        let poller = poller(source, false);

        let _guard = poller.in_flight.lock().await;
        assert_eq!(poller.refresh_now().await, RefreshOutcome::Skipped);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_refresh_rearms_single_chain() {
        let (source, calls) = Scripted::new(vec![Ok((ALL_OK, Some("max-age=200")))]);
        let poller = poller(source, false);

        // t=0: initial fetch, one-shot for t=200
        poller.start().await;
        settle().await;

        // t=200: one-shot fires, re-arms for t=400
        advance(200).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // t=300: fallback fires, re-arms for t=500, superseding t=400
        advance(100).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // t=400: superseded, nothing happens
        advance(100).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // t=500: the surviving one-shot
        advance(100).await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_poller_stops_timers() {
        let (source, calls) = Scripted::new(vec![Ok((ALL_OK, Some("max-age=30")))]);
        let poller = poller(source, false);

        poller.start().await;
        settle().await;
        drop(poller);

        advance(600).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
