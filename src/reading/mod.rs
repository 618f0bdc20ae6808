use crate::channel::{ChannelProfile, Severity};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;


/// Maximum noise per step, as a fraction of the profile's value range.
pub const NOISE_FRACTION: f64 = 0.05;

/// A single sensor reading. Created fresh on every regeneration, never
/// mutated in place.
#[derive(Clone, Debug, Serialize)]
pub struct Reading {
    pub value: f64,
    pub unit: &'static str,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
}

impl Reading {
    /// Build a reading for `profile`, walking from `previous` (or the range
    /// midpoint when there is no prior value).
    pub fn generate(profile: &ChannelProfile, previous: Option<f64>) -> Self {
        let value = generate_value(profile, previous);
        Self {
            value,
            unit: profile.unit,
            timestamp: Utc::now(),
            severity: classify(value, profile),
        }
    }
}

/// Produce the next value of a bounded random walk over `profile`'s range.
///
/// Noise is drawn uniformly from ±5% of the range, applied to `previous`
/// (midpoint when absent), clamped to the bounds, and rounded to one decimal.
pub fn generate_value(profile: &ChannelProfile, previous: Option<f64>) -> f64 {
    let base = previous.unwrap_or_else(|| profile.midpoint());
    let spread = NOISE_FRACTION * profile.range();
    let noise = rand::thread_rng().gen_range(-spread..=spread);
    let value = (base + noise).clamp(profile.min_value, profile.max_value);
    round_one_decimal(value)
}

/// Classify a value against the profile's thresholds.
///
/// Single-sided, ascending: anything below `warning_threshold` is `Normal`,
/// however close to `min_value`. There is deliberately no low-side alarm.
pub fn classify(value: f64, profile: &ChannelProfile) -> Severity {
    if value >= profile.alarm_threshold {
        Severity::Alarm
    } else if value >= profile.warning_threshold {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
