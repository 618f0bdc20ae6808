use crate::channel::{profile, ChannelKind};
use crate::history::{synthesize, HistoricalPoint, DEFAULT_POINT_INTERVAL_MINUTES};
use crate::registry::{AssetRegistry, MonitoredAsset};
use rand::Rng;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
mod tests;

const POINT_LATENCY_MS: RangeInclusive<u64> = 50..=150;
const BULK_LATENCY_MS: RangeInclusive<u64> = 50..=200;
const HISTORY_LATENCY_MS: RangeInclusive<u64> = 100..=300;

/// Whether query operations simulate network-ish latency.
///
/// Latency is advisory realism for callers that already treat these as
/// asynchronous operations; it has no correctness effect. Tests run with
/// [`LatencyProfile::disabled`] for determinism.
#[derive(Clone, Copy, Debug)]
pub struct LatencyProfile {
    enabled: bool,
}

impl LatencyProfile {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn simulate(&self, range: RangeInclusive<u64>) {
        if !self.enabled {
            return;
        }
        let ms = rand::thread_rng().gen_range(range);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Read API over the asset registry: point, bulk, and history lookups.
///
/// All results are snapshots; absence of an asset is represented as absence
/// in the result, never as an error.
pub struct QueryFacade {
    registry: Arc<AssetRegistry>,
    latency: LatencyProfile,
}

impl QueryFacade {
    pub fn new(registry: Arc<AssetRegistry>, latency: LatencyProfile) -> Self {
        Self { registry, latency }
    }

    /// Current snapshot of one asset, or `None` for an unknown ID.
    pub async fn get_one(&self, asset_id: &str) -> Option<MonitoredAsset> {
        self.latency.simulate(POINT_LATENCY_MS).await;
        self.registry.get(asset_id)
    }

    /// Current snapshots for the subset of `asset_ids` that exist. One
    /// simulated delay for the whole batch, not per item.
    pub async fn get_many(&self, asset_ids: &[String]) -> HashMap<String, MonitoredAsset> {
        self.latency.simulate(BULK_LATENCY_MS).await;
        asset_ids
            .iter()
            .filter_map(|id| self.registry.get(id).map(|asset| (id.clone(), asset)))
            .collect()
    }

    /// Synthesize history for `kind` over the last `hours` hours at the
    /// default 15-minute spacing.
    ///
    /// Pure function of the channel profile — the asset need not currently
    /// expose `kind` (or exist at all).
    pub async fn get_history(
        &self,
        _asset_id: &str,
        kind: ChannelKind,
        hours: u32,
    ) -> Vec<HistoricalPoint> {
        self.latency.simulate(HISTORY_LATENCY_MS).await;
        synthesize(profile(kind), hours, DEFAULT_POINT_INTERVAL_MINUTES)
    }
}
