//! Background reclamation of expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::store::TtlCache;

/// Default interval between sweeps. An expired entry that is never read again
/// lingers at most this long past its TTL.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Owns the sweeper task. Dropping the handle stops the task.
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Signals the sweeper to stop and waits for it to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Spawns a task that calls `clear_expired` every `interval`.
///
/// The first sweep runs one full interval after spawning. Must be called from
/// within a Tokio runtime.
pub fn spawn_sweeper<V>(cache: Arc<TtlCache<V>>, interval: Duration) -> SweeperHandle
where
    V: Clone + Send + Sync + 'static,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(sweep_loop(cache, interval, shutdown_rx));
    info!("Cache sweeper started (interval: {}s)", interval.as_secs());

    SweeperHandle {
        shutdown_tx,
        task: Some(task),
    }
}

async fn sweep_loop<V>(
    cache: Arc<TtlCache<V>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    V: Clone + Send + Sync + 'static,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = cache.clear_expired();
                debug!(
                    "Cache sweep removed {removed} expired entries, {} remain",
                    cache.size()
                );
            }
            changed = shutdown_rx.changed() => {
                // A closed channel means the handle is gone.
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!("Cache sweeper stopped");
}
