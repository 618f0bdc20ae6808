use crate::channel::ChannelProfile;
use crate::reading::generate_value;
use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Serialize;


/// Default spacing between synthesized history points.
pub const DEFAULT_POINT_INTERVAL_MINUTES: i64 = 15;

/// One synthesized historical sample. Never stored; every history request
/// recomputes a fresh series.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct HistoricalPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Synthesize a plausible time series for `profile` covering the last
/// `hours` hours at `interval_minutes` spacing, oldest point first and the
/// newest at "now".
///
/// Values follow a bounded random walk seeded at the range midpoint, with a
/// diurnal sine curve (trough at midnight, peak around noon, ±30%) modulating
/// the walk base at each step. Each point's value becomes the next step's
/// base, so successive points are correlated rather than independent draws.
pub fn synthesize(
    profile: &ChannelProfile,
    hours: u32,
    interval_minutes: i64,
) -> Vec<HistoricalPoint> {
    let count = i64::from(hours) * (60 / interval_minutes) + 1;
    let now = Utc::now();

    let mut points = Vec::with_capacity(count as usize);
    let mut base = profile.midpoint();

    // i = count-1 is the oldest point; i = 0 lands on "now"
    for i in (0..count).rev() {
        let timestamp = now - Duration::minutes(i * interval_minutes);
        let value = generate_value(profile, Some(base * diurnal_multiplier(timestamp)));
        points.push(HistoricalPoint { timestamp, value });
        base = value;
    }

    points
}

/// Diurnal modulation for a timestamp: a sinusoid over the hour of day,
/// 0.7 at midnight, 1.0 at 06:00, 1.3 at noon, back to 1.0 at 18:00.
fn diurnal_multiplier(timestamp: DateTime<Utc>) -> f64 {
    let hour_of_day = f64::from(timestamp.hour());
    ((hour_of_day - 6.0) * std::f64::consts::PI / 12.0).sin() * 0.3 + 1.0
}
