use std::sync::Arc;
use std::time::Duration;

use plan_core::ProgressSnapshot;
use plan_core::model::ChecklistKey;
use storage::repository::StoreChange;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::ProgressAggregator;

/// Recompute cadence for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressConfig {
    poll_interval: Duration,
}

impl ProgressConfig {
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);
    pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

    /// Poll every `poll_interval`, raised to `MIN_POLL_INTERVAL` if shorter.
    #[must_use]
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            poll_interval: poll_interval.max(Self::MIN_POLL_INTERVAL),
        }
    }

    /// Fallback polling interval for writes that raise no change notification.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Keeps an overall `ProgressSnapshot` current for one display session.
///
/// Recomputes once on start, on every checklist change notification and on
/// every poll tick. The background task owns the timer and the change
/// listener; dropping the watcher aborts it.
pub struct ProgressWatcher {
    task: JoinHandle<()>,
    snapshots: watch::Receiver<ProgressSnapshot>,
}

impl ProgressWatcher {
    /// Spawn the watcher task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start(
        aggregator: Arc<ProgressAggregator>,
        changes: broadcast::Receiver<StoreChange>,
        config: ProgressConfig,
    ) -> Self {
        let (tx, snapshots) = watch::channel(ProgressSnapshot::empty(aggregator.total_possible()));
        let task = tokio::spawn(run(aggregator, changes, config.poll_interval, tx));
        tracing::debug!(poll_ms = config.poll_interval.as_millis(), "progress watcher started");
        Self { task, snapshots }
    }

    /// A receiver that is notified whenever the snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.snapshots.clone()
    }

    #[must_use]
    pub fn current(&self) -> ProgressSnapshot {
        *self.snapshots.borrow()
    }

    /// Stop recomputing and release the timer and listener.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for ProgressWatcher {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("progress watcher stopped");
    }
}

enum Trigger {
    Recompute,
    Ignore,
}

async fn run(
    aggregator: Arc<ProgressAggregator>,
    changes: broadcast::Receiver<StoreChange>,
    poll_interval: Duration,
    tx: watch::Sender<ProgressSnapshot>,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut changes = Some(changes);

    loop {
        // The first tick completes immediately, giving the on-mount computation.
        let trigger = tokio::select! {
            _ = ticker.tick() => Trigger::Recompute,
            trigger = next_change(&mut changes) => trigger,
        };
        if matches!(trigger, Trigger::Ignore) {
            continue;
        }

        let snapshot = aggregator.snapshot().await;
        tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }
}

async fn next_change(changes: &mut Option<broadcast::Receiver<StoreChange>>) -> Trigger {
    let Some(rx) = changes.as_mut() else {
        return std::future::pending().await;
    };
    match rx.recv().await {
        Ok(change) if ChecklistKey::has_prefix(&change.key) => Trigger::Recompute,
        Ok(_) => Trigger::Ignore,
        Err(broadcast::error::RecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "progress watcher lagged behind store changes");
            Trigger::Recompute
        }
        Err(broadcast::error::RecvError::Closed) => {
            tracing::debug!("store change feed closed; relying on polling");
            *changes = None;
            Trigger::Ignore
        }
    }
}
