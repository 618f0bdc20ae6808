use crate::channel::{profile, ChannelKind, ChannelProfile};
use crate::clock::{SimulationClock, TickStats};
use crate::config::EngineConfig;
use crate::history::HistoricalPoint;
use crate::query::{LatencyProfile, QueryFacade};
use crate::registry::{AssetRegistry, MonitoredAsset};
use crate::seed;
use crate::subscription::{ObserverCallback, SubscriptionDirectory, SubscriptionHandle};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[cfg(test)]
mod tests;

/// The telemetry engine: owns the asset registry, subscription directory,
/// simulation clock, and the query façade, and exposes the external API.
///
/// An explicit instance, not process-global state — applications construct
/// one and hand it (behind `Arc`) to whatever consumes it; tests construct
/// as many independent instances as they like.
pub struct TelemetryEngine {
    config: EngineConfig,
    registry: Arc<AssetRegistry>,
    directory: Arc<SubscriptionDirectory>,
    clock: SimulationClock,
    query: QueryFacade,
}

impl TelemetryEngine {
    pub fn new(config: EngineConfig) -> Self {
        let registry = Arc::new(AssetRegistry::new());
        let directory = Arc::new(SubscriptionDirectory::new());
        let clock = SimulationClock::new(Arc::clone(&registry), Arc::clone(&directory));
        let latency = if config.simulate_latency {
            LatencyProfile::enabled()
        } else {
            LatencyProfile::disabled()
        };
        let query = QueryFacade::new(Arc::clone(&registry), latency);

        Self {
            config,
            registry,
            directory,
            clock,
            query,
        }
    }

    /// Load seed assets (built-in table, or the configured seed file) and
    /// start the clock at the configured interval.
    pub async fn initialize(&self) -> Result<()> {
        let assets = match &self.config.seed_file {
            Some(path) => seed::load_seed_file(path)?,
            None => seed::default_seed(),
        };

        for asset in &assets {
            self.registry
                .register(&asset.asset_id, &asset.display_name, &asset.channels);
        }
        info!(assets = assets.len(), "Seed data loaded");

        self.clock.start(self.config.tick_interval).await;
        Ok(())
    }

    /// Register (or re-register) an asset dynamically.
    pub fn add_asset(&self, asset_id: &str, display_name: &str, kinds: &[ChannelKind]) {
        self.registry.register(asset_id, display_name, kinds);
    }

    pub fn has(&self, asset_id: &str) -> bool {
        self.registry.has(asset_id)
    }

    pub fn all_ids(&self) -> Vec<String> {
        self.registry.all_ids()
    }

    /// Point lookup; `None` for an unknown asset.
    pub async fn get_one(&self, asset_id: &str) -> Option<MonitoredAsset> {
        self.query.get_one(asset_id).await
    }

    /// Bulk lookup; returns only the IDs that exist.
    pub async fn get_many(&self, asset_ids: &[String]) -> HashMap<String, MonitoredAsset> {
        self.query.get_many(asset_ids).await
    }

    /// Synthesized history for `kind` over the last `hours` hours.
    pub async fn get_history(
        &self,
        asset_id: &str,
        kind: ChannelKind,
        hours: u32,
    ) -> Vec<HistoricalPoint> {
        self.query.get_history(asset_id, kind, hours).await
    }

    /// Every asset with at least one channel at warning severity or above.
    pub fn assets_with_alerts(&self) -> HashMap<String, MonitoredAsset> {
        self.registry.assets_with_alerts()
    }

    /// Subscribe an observer to one asset's tick updates.
    pub fn subscribe(&self, asset_id: &str, callback: ObserverCallback) -> SubscriptionHandle {
        self.directory.subscribe(asset_id, callback)
    }

    /// (Re)start the clock at `interval`. Replaces any running ticker.
    pub async fn start(&self, interval: Duration) {
        self.clock.start(interval).await;
    }

    /// Stop the clock; guaranteed no tick runs after this returns.
    pub async fn stop(&self) {
        self.clock.stop().await;
    }

    /// Profile for a channel kind, for callers rendering axes or gauges.
    pub fn profile(&self, kind: ChannelKind) -> &'static ChannelProfile {
        profile(kind)
    }

    /// Tick-loop counters.
    pub fn stats(&self) -> &TickStats {
        &self.clock.stats
    }
}
