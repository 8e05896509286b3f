//! Refresh scheduling.
//!
//! Two kinds of timer drive a board:
//!
//! - a server-driven one-shot, armed after each successful fetch from the
//!   response's `max-age`;
//! - a fixed periodic fallback, armed once, which keeps the board moving even
//!   if TfL stops sending a usable `max-age`.
//!
//! Re-arming the one-shot supersedes any earlier one: each arm bumps a
//! generation counter, and a timer that wakes to find a newer generation
//! does nothing. Without this, every fallback refresh would start another
//! self-perpetuating chain of one-shots.
//!
//! Timers hold only a weak reference to their target, so dropping the target
//! stops them at their next wake.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Default period of the fallback timer (5 minutes).
pub const DEFAULT_FALLBACK: Duration = Duration::from_secs(300);

/// Something the timers can refresh.
pub trait Refresh: Send + Sync + 'static {
    /// Run one refresh cycle.
    fn refresh(self: Arc<Self>) -> impl Future<Output = ()> + Send;

    /// The scheduling state for this target.
    fn scheduler(&self) -> &RefreshScheduler;
}

/// Per-target scheduling state.
#[derive(Debug)]
pub struct RefreshScheduler {
    generation: AtomicU64,
    fallback: Duration,
}

impl RefreshScheduler {
    /// Create scheduling state with the given fallback period.
    ///
    /// `fallback` must be non-zero.
    pub fn new(fallback: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            fallback,
        }
    }

    /// Period of the fallback timer.
    pub fn fallback(&self) -> Duration {
        self.fallback
    }

    /// Start a new generation, superseding any armed one-shot.
    fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}

/// Arm a one-shot refresh of `target` after `max_age` seconds.
///
/// Does nothing for `None`. Returns the delay that was armed.
pub fn schedule_next<T: Refresh>(target: &Arc<T>, max_age: Option<u64>) -> Option<Duration> {
    let delay = Duration::from_secs(max_age?);
    let generation = target.scheduler().arm();
    let weak = Arc::downgrade(target);

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let Some(target) = weak.upgrade() else {
            return;
        };
        if !target.scheduler().is_current(generation) {
            trace!(generation, "superseded refresh timer");
            return;
        }
        target.refresh().await;
    });

    Some(delay)
}

/// Start the periodic fallback refresh of `target`.
///
/// The first refresh happens one full period after this call.
pub fn spawn_fallback<T: Refresh>(target: &Arc<T>) -> JoinHandle<()> {
    let period = target.scheduler().fallback();
    let weak = Arc::downgrade(target);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            let Some(target) = weak.upgrade() else {
                break;
            };
            target.refresh().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Counts refreshes; never re-arms itself.
    struct Counter {
        refreshes: AtomicUsize,
        scheduler: RefreshScheduler,
    }

    impl Counter {
        fn new(fallback: Duration) -> Arc<Self> {
            Arc::new(Self {
                refreshes: AtomicUsize::new(0),
                scheduler: RefreshScheduler::new(fallback),
            })
        }

        fn count(&self) -> usize {
            self.refreshes.load(Ordering::SeqCst)
        }
    }

    impl Refresh for Counter {
        async fn refresh(self: Arc<Self>) {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
        }

        fn scheduler(&self) -> &RefreshScheduler {
            &self.scheduler
        }
    }

    /// Let spawned tasks run up to their next timer.
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
    async fn none_arms_nothing() {
        let counter = Counter::new(Duration::from_secs(3600));

        assert_eq!(schedule_next(&counter, None), None);
        advance(7200).await;

        assert_eq!(counter.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn max_age_arms_one_refresh() {
        let counter = Counter::new(Duration::from_secs(3600));

        assert_eq!(
            schedule_next(&counter, Some(300)),
            Some(Duration::from_millis(300_000))
        );
        settle().await;

        advance(299).await;
        assert_eq!(counter.count(), 0);

        advance(1).await;
        assert_eq!(counter.count(), 1);

        advance(600).await;
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_max_age_refreshes_immediately() {
        let counter = Counter::new(Duration::from_secs(3600));

        schedule_next(&counter, Some(0));
        settle().await;

        assert_eq!(counter.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_supersedes_earlier_timer() {
        let counter = Counter::new(Duration::from_secs(3600));

        schedule_next(&counter, Some(30));
        settle().await;
        schedule_next(&counter, Some(60));
        settle().await;

        advance(30).await;
        assert_eq!(counter.count(), 0);

        advance(30).await;
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_target_is_not_refreshed() {
        let counter = Counter::new(Duration::from_secs(3600));
        let weak = Arc::downgrade(&counter);

        schedule_next(&counter, Some(10));
        settle().await;
        drop(counter);

        advance(10).await;
        assert!(weak.upgrade().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_is_periodic() {
        let counter = Counter::new(Duration::from_secs(300));
        let _fallback = spawn_fallback(&counter);
        settle().await;

        // No refresh at startup
        assert_eq!(counter.count(), 0);

        advance(300).await;
        assert_eq!(counter.count(), 1);

        advance(300).await;
        assert_eq!(counter.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_and_one_shot_are_independent() {
        let counter = Counter::new(Duration::from_secs(300));
        let _fallback = spawn_fallback(&counter);
        schedule_next(&counter, Some(100));
        settle().await;

        advance(100).await;
        assert_eq!(counter.count(), 1);

        advance(200).await;
        assert_eq!(counter.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_stops_when_target_dropped() {
        let counter = Counter::new(Duration::from_secs(300));
        let handle = spawn_fallback(&counter);
        settle().await;
        drop(counter);

        advance(300).await;
        assert!(handle.is_finished());
    }
}
