use std::path::PathBuf;
use std::time::Duration;

/// Engine configuration. Every field has a working default; env vars
/// override for deployments that need a different cadence.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cadence of the simulation clock.
    pub tick_interval: Duration,
    /// Whether query operations add simulated latency.
    pub simulate_latency: bool,
    /// Optional TOML seed file; the built-in seed table is used when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: crate::clock::DEFAULT_TICK_INTERVAL,
            simulate_latency: true,
            seed_file: None,
        }
    }
}

impl EngineConfig {
    /// Build from env vars, falling back to defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("PULSE_TICK_INTERVAL_SECS") {
            if let Ok(secs) = v.parse::<u64>() {
                cfg.tick_interval = Duration::from_secs(secs);
            }
        }
        if let Ok(v) = std::env::var("PULSE_SIMULATE_LATENCY") {
            if let Ok(b) = v.parse::<bool>() {
                cfg.simulate_latency = b;
            }
        }
        if let Ok(v) = std::env::var("PULSE_SEED_FILE") {
            if !v.is_empty() {
                cfg.seed_file = Some(PathBuf::from(v));
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.tick_interval, Duration::from_secs(5));
        assert!(cfg.simulate_latency);
        assert!(cfg.seed_file.is_none());
    }
}
