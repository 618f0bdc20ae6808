use crate::channel::{profile, ChannelKind, Severity};
use crate::reading::Reading;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;


/// A monitored asset and its current reading per channel.
///
/// Identity is `asset_id`, an externally-defined opaque key. All read APIs
/// hand out clones of this struct; callers never hold a reference into the
/// registry's internal state.
#[derive(Clone, Debug, Serialize)]
pub struct MonitoredAsset {
    pub asset_id: String,
    pub display_name: String,
    pub readings: HashMap<ChannelKind, Reading>,
    pub last_updated: DateTime<Utc>,
}

impl MonitoredAsset {
    /// True if any channel currently reads at warning severity or above.
    pub fn has_alert(&self) -> bool {
        self.readings
            .values()
            .any(|r| r.severity >= Severity::Warning)
    }
}

/// Owns all live asset state. Lock-free concurrent map for fast reads; each
/// asset's channels are updated under a single entry lock so an asset is
/// never observed half-updated.
pub struct AssetRegistry {
    assets: DashMap<String, MonitoredAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            assets: DashMap::new(),
        }
    }

    /// Register an asset with the given channel set, computing one fresh
    /// reading per channel from the range midpoint.
    ///
    /// Re-registering an existing `asset_id` replaces its channel set and
    /// readings wholesale (idempotent replace, not merge).
    pub fn register(&self, asset_id: &str, display_name: &str, kinds: &[ChannelKind]) {
        let now = Utc::now();
        let readings = kinds
            .iter()
            .map(|&kind| (kind, Reading::generate(profile(kind), None)))
            .collect();

        self.assets.insert(
            asset_id.to_string(),
            MonitoredAsset {
                asset_id: asset_id.to_string(),
                display_name: display_name.to_string(),
                readings,
                last_updated: now,
            },
        );

        info!(asset_id = %asset_id, channels = kinds.len(), "Asset registered");
    }

    /// Get an asset snapshot by ID.
    pub fn get(&self, asset_id: &str) -> Option<MonitoredAsset> {
        self.assets.get(asset_id).map(|a| a.clone())
    }

    pub fn has(&self, asset_id: &str) -> bool {
        self.assets.contains_key(asset_id)
    }

    /// All registered asset IDs (unspecified order).
    pub fn all_ids(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Regenerate every channel of one asset, walking each reading from its
    /// current value, and bump `last_updated`.
    ///
    /// Returns the post-update snapshot, or `None` for an unknown asset.
    /// All channels are rewritten while the entry lock is held, so readers
    /// see either the previous tick or this one, never a mix.
    pub fn tick_one(&self, asset_id: &str) -> Option<MonitoredAsset> {
        let mut entry = self.assets.get_mut(asset_id)?;
        let now = Utc::now();

        for (kind, reading) in entry.readings.iter_mut() {
            *reading = Reading::generate(profile(*kind), Some(reading.value));
        }
        entry.last_updated = now;

        Some(entry.clone())
    }

    /// Snapshots of every asset with at least one channel at warning
    /// severity or above.
    pub fn assets_with_alerts(&self) -> HashMap<String, MonitoredAsset> {
        self.assets
            .iter()
            .filter(|a| a.has_alert())
            .map(|a| (a.key().clone(), a.value().clone()))
            .collect()
    }

    /// Overwrite a single reading, for driving severity states in tests.
    #[cfg(test)]
    pub(crate) fn inject_reading(&self, asset_id: &str, kind: ChannelKind, value: f64) {
        use crate::reading::classify;

        if let Some(mut entry) = self.assets.get_mut(asset_id) {
            let p = profile(kind);
            entry.readings.insert(
                kind,
                Reading {
                    value,
                    unit: p.unit,
                    timestamp: Utc::now(),
                    severity: classify(value, p),
                },
            );
        }
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
