//! Unread-activity watcher
//!
//! Detects, without user action, that the feed has content newer than the
//! item currently at the top. A background task probes page 0 with
//! `limit = 1` on a fixed interval and compares the returned id against the
//! baseline. Detection is one-shot: the first strictly-greater id raises the
//! flag and the task terminates; only an explicit `reset` re-arms it.
//!
//! The task is an owned, cancellable resource: `stop` (and `Drop`) abort it
//! deterministically, which also cancels any probe request in flight.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::INDICATOR_DISMISS_AFTER;
use crate::domain::entities::FeedQuery;
use crate::domain::ports::FeedApi;

/// One-shot newness detector
///
/// Fires exactly once when an observed top id is strictly greater than the
/// baseline; later observations never fire again until `reset`.
#[derive(Debug, Clone)]
pub struct NewActivityDetector {
    baseline: i64,
    fired: bool,
}

impl NewActivityDetector {
    /// `baseline` is the id of the item currently rendered at the top
    pub fn new(baseline: i64) -> Self {
        Self {
            baseline,
            fired: false,
        }
    }

    /// Feed an observed top id. Returns true only on the first observation
    /// strictly greater than the baseline.
    pub fn observe(&mut self, top_id: i64) -> bool {
        if self.fired || top_id <= self.baseline {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Re-arm with a new baseline
    pub fn reset(&mut self, baseline: i64) {
        self.baseline = baseline;
        self.fired = false;
    }
}

/// Background poller that feeds a `NewActivityDetector`
pub struct ActivityWatcher<F: FeedApi + 'static> {
    api: Arc<F>,
    probe: FeedQuery,
    interval: Duration,
    flag_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl<F: FeedApi + 'static> ActivityWatcher<F> {
    /// Start watching the feed identified by `query`'s tab and filters.
    /// `top_item_id` is the id of the first item currently rendered.
    pub fn spawn(api: Arc<F>, query: FeedQuery, top_item_id: i64, interval: Duration) -> Self {
        // The probe is the lightest possible read of the same feed
        let probe = query.at_page(0).with_limit(1);
        let (flag_tx, _) = watch::channel(false);

        let mut watcher = Self {
            api,
            probe,
            interval,
            flag_tx,
            handle: None,
        };
        watcher.start(top_item_id);
        watcher
    }

    fn start(&mut self, top_item_id: i64) {
        let api = self.api.clone();
        let probe = self.probe.clone();
        let interval = self.interval;
        let tx = self.flag_tx.clone();
        self.handle = Some(tokio::spawn(poll_loop(
            api,
            probe,
            top_item_id,
            interval,
            tx,
        )));
    }

    /// Whether new activity has been detected since the last reset
    pub fn has_new_activity(&self) -> bool {
        *self.flag_tx.borrow()
    }

    /// Channel that flips to true on detection. The current value counts as
    /// seen, so `changed()` waits for the next transition.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag_tx.subscribe()
    }

    /// Whether the poll task is still running. False once detection fired
    /// (one-shot) or after `stop`.
    pub fn is_polling(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Cancel the poll task. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Re-arm detection with a new baseline, restarting the poll task.
    /// This is the only way polling resumes after a detection.
    pub fn reset(&mut self, top_item_id: i64) {
        self.stop();
        self.flag_tx.send_replace(false);
        self.start(top_item_id);
    }
}

impl<F: FeedApi + 'static> Drop for ActivityWatcher<F> {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop<F: FeedApi>(
    api: Arc<F>,
    probe: FeedQuery,
    baseline: i64,
    every: Duration,
    tx: watch::Sender<bool>,
) {
    let mut detector = NewActivityDetector::new(baseline);
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first probe runs one full interval after spawn, not immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match api.fetch_page(&probe).await {
            Ok(page) => {
                if let Some(top) = page.items.first() {
                    if detector.observe(top.id) {
                        let _ = tx.send(true);
                        return;
                    }
                }
            }
            Err(e) => {
                // A failed probe is skipped; the next tick tries again
                tracing::warn!("activity probe failed: {}", e);
            }
        }
    }
}

/// Visibility window of the "new activity" banner
///
/// The banner auto-dismisses after a fixed timeout whether or not the user
/// acted on it; dismissal does not re-arm detection.
#[derive(Debug, Clone, Copy)]
pub struct NewActivityIndicator {
    shown_at: Instant,
    dismiss_after: Duration,
}

impl NewActivityIndicator {
    pub fn shown_at(now: Instant) -> Self {
        Self {
            shown_at: now,
            dismiss_after: INDICATOR_DISMISS_AFTER,
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn visible_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < self.dismiss_after
    }
}
