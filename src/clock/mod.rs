use crate::registry::AssetRegistry;
use crate::subscription::SubscriptionDirectory;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};


/// Default cadence for live regeneration.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Counters for the free-running tick loop. Atomics only; reads never block
/// the loop.
#[derive(Default)]
pub struct TickStats {
    total_ticks: AtomicU64,
    total_readings: AtomicU64,
    last_tick_ms: AtomicI64,
}

impl TickStats {
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks.load(Ordering::Relaxed)
    }

    pub fn total_readings(&self) -> u64 {
        self.total_readings.load(Ordering::Relaxed)
    }

    /// Timestamp of the most recent completed tick, if any tick has run.
    pub fn last_tick(&self) -> Option<DateTime<Utc>> {
        match self.last_tick_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => DateTime::from_timestamp_millis(ms),
        }
    }

    fn record_tick(&self, readings: u64) {
        self.total_ticks.fetch_add(1, Ordering::Relaxed);
        self.total_readings.fetch_add(readings, Ordering::Relaxed);
        self.last_tick_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }
}

struct TickerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// Drives all state mutation: on each tick, every registered asset's
/// channels are regenerated and that asset's subscribers notified.
///
/// Two states, Stopped (initial) and Running. `start` replaces any active
/// ticker so exactly one exists at a time; `stop` joins the loop before
/// returning, so no tick runs after it completes. Both are idempotent.
pub struct SimulationClock {
    registry: Arc<AssetRegistry>,
    directory: Arc<SubscriptionDirectory>,
    ticker: Mutex<Option<TickerHandle>>,
    pub stats: Arc<TickStats>,
}

impl SimulationClock {
    pub fn new(registry: Arc<AssetRegistry>, directory: Arc<SubscriptionDirectory>) -> Self {
        Self {
            registry,
            directory,
            ticker: Mutex::new(None),
            stats: Arc::new(TickStats::default()),
        }
    }

    /// Begin periodic regeneration at `interval`. If a ticker is already
    /// running it is stopped first — never two tickers at once.
    pub async fn start(&self, interval: Duration) {
        let mut slot = self.ticker.lock().await;

        if let Some(existing) = slot.take() {
            info!("Simulation clock already running, replacing ticker");
            Self::halt(existing).await;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let registry = Arc::clone(&self.registry);
        let directory = Arc::clone(&self.directory);
        let stats = Arc::clone(&self.stats);

        let task = tokio::spawn(async move {
            // First tick fires one full interval after start, not immediately
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        run_tick(&registry, &directory, &stats);
                    }
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                }
            }
        });

        *slot = Some(TickerHandle {
            shutdown: shutdown_tx,
            task,
        });

        info!(interval_ms = interval.as_millis() as u64, "Simulation clock started");
    }

    /// Stop the active ticker, joining the loop before returning. No-op when
    /// already stopped.
    pub async fn stop(&self) {
        let handle = self.ticker.lock().await.take();
        match handle {
            Some(handle) => {
                Self::halt(handle).await;
                info!("Simulation clock stopped");
            }
            None => debug!("Simulation clock already stopped"),
        }
    }

    /// True while a ticker is active.
    pub async fn is_running(&self) -> bool {
        self.ticker.lock().await.is_some()
    }

    async fn halt(handle: TickerHandle) {
        // Receiver may already be gone if the task somehow exited
        let _ = handle.shutdown.send(true);
        if let Err(e) = handle.task.await {
            warn!(error = %e, "Ticker task did not shut down cleanly");
        }
    }
}

/// One batch: regenerate every asset, notifying each asset's subscribers
/// with its freshly updated snapshot. An asset's channels are fully updated
/// before its observers run; ordering across assets is unspecified.
fn run_tick(
    registry: &AssetRegistry,
    directory: &SubscriptionDirectory,
    stats: &TickStats,
) {
    let mut readings = 0u64;

    for asset_id in registry.all_ids() {
        if let Some(snapshot) = registry.tick_one(&asset_id) {
            readings += snapshot.readings.len() as u64;
            directory.notify_all(&asset_id, &snapshot);
        }
    }

    stats.record_tick(readings);
    debug!(assets = registry.len(), readings = readings, "Tick complete");
}
