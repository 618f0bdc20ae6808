use serde::{Deserialize, Serialize};


/// The closed set of monitored quantities an asset can expose.
///
/// Each kind maps to exactly one [`ChannelProfile`]; the mapping is fixed for
/// the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Temperature,
    Humidity,
    Occupancy,
    Co2,
    Energy,
    Lighting,
    Airflow,
    Pressure,
}

impl ChannelKind {
    /// Every channel kind, in declaration order.
    pub const ALL: [ChannelKind; 8] = [
        ChannelKind::Temperature,
        ChannelKind::Humidity,
        ChannelKind::Occupancy,
        ChannelKind::Co2,
        ChannelKind::Energy,
        ChannelKind::Lighting,
        ChannelKind::Airflow,
        ChannelKind::Pressure,
    ];
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChannelKind::Temperature => "temperature",
            ChannelKind::Humidity => "humidity",
            ChannelKind::Occupancy => "occupancy",
            ChannelKind::Co2 => "co2",
            ChannelKind::Energy => "energy",
            ChannelKind::Lighting => "lighting",
            ChannelKind::Airflow => "airflow",
            ChannelKind::Pressure => "pressure",
        };
        write!(f, "{}", name)
    }
}

/// Severity classification of a reading against its profile thresholds.
///
/// Ordered: `Normal < Warning < Alarm`, so "is alerting" is
/// `severity >= Severity::Warning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Alarm,
}

/// Static per-kind configuration: value bounds, display unit, and the
/// warning/alarm thresholds readings are classified against.
///
/// Read-only after startup. Threshold ordering is authored data and is not
/// validated against the bounds (matching the source configuration).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ChannelProfile {
    pub kind: ChannelKind,
    pub min_value: f64,
    pub max_value: f64,
    pub unit: &'static str,
    pub warning_threshold: f64,
    pub alarm_threshold: f64,
}

impl ChannelProfile {
    /// Width of the value range, used for noise scaling.
    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Midpoint of the value range, the seed for fresh readings.
    pub fn midpoint(&self) -> f64 {
        self.min_value + self.range() * 0.5
    }
}

const TEMPERATURE: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Temperature,
    min_value: 15.0,
    max_value: 35.0,
    unit: "°C",
    warning_threshold: 28.0,
    alarm_threshold: 32.0,
};

const HUMIDITY: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Humidity,
    min_value: 20.0,
    max_value: 80.0,
    unit: "%",
    warning_threshold: 65.0,
    alarm_threshold: 75.0,
};

const OCCUPANCY: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Occupancy,
    min_value: 0.0,
    max_value: 50.0,
    unit: "people",
    warning_threshold: 40.0,
    alarm_threshold: 48.0,
};

const CO2: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Co2,
    min_value: 350.0,
    max_value: 2000.0,
    unit: "ppm",
    warning_threshold: 1000.0,
    alarm_threshold: 1500.0,
};

const ENERGY: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Energy,
    min_value: 0.0,
    max_value: 500.0,
    unit: "kWh",
    warning_threshold: 400.0,
    alarm_threshold: 470.0,
};

const LIGHTING: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Lighting,
    min_value: 100.0,
    max_value: 1000.0,
    unit: "lux",
    warning_threshold: 800.0,
    alarm_threshold: 950.0,
};

const AIRFLOW: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Airflow,
    min_value: 0.0,
    max_value: 100.0,
    unit: "L/s",
    warning_threshold: 85.0,
    alarm_threshold: 95.0,
};

const PRESSURE: ChannelProfile = ChannelProfile {
    kind: ChannelKind::Pressure,
    min_value: 980.0,
    max_value: 1050.0,
    unit: "hPa",
    warning_threshold: 1030.0,
    alarm_threshold: 1045.0,
};

/// Look up the profile for a channel kind.
///
/// Total over the closed [`ChannelKind`] set — an unknown kind is
/// unrepresentable, so there is no error path.
pub fn profile(kind: ChannelKind) -> &'static ChannelProfile {
    match kind {
        ChannelKind::Temperature => &TEMPERATURE,
        ChannelKind::Humidity => &HUMIDITY,
        ChannelKind::Occupancy => &OCCUPANCY,
        ChannelKind::Co2 => &CO2,
        ChannelKind::Energy => &ENERGY,
        ChannelKind::Lighting => &LIGHTING,
        ChannelKind::Airflow => &AIRFLOW,
        ChannelKind::Pressure => &PRESSURE,
    }
}
