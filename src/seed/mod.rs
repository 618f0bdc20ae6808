use crate::channel::ChannelKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[cfg(test)]
mod tests;

/// One seed entry: an asset and the channel kinds it exposes.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedAsset {
    pub asset_id: String,
    pub display_name: String,
    pub channels: Vec<ChannelKind>,
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    assets: Vec<SeedAsset>,
}

/// Built-in seed fleet used when no seed file is configured.
pub fn default_seed() -> Vec<SeedAsset> {
    use ChannelKind::*;

    let table: &[(&str, &str, &[ChannelKind])] = &[
        (
            "zone-l1-north",
            "Level 1 North Zone",
            &[Temperature, Humidity, Occupancy, Co2],
        ),
        (
            "zone-l1-south",
            "Level 1 South Zone",
            &[Temperature, Humidity, Occupancy, Co2, Lighting],
        ),
        (
            "zone-l2-open",
            "Level 2 Open Plan",
            &[Temperature, Humidity, Occupancy, Co2, Energy],
        ),
        (
            "ahu-01",
            "Air Handling Unit 01",
            &[Temperature, Airflow, Pressure, Energy],
        ),
        (
            "ahu-02",
            "Air Handling Unit 02",
            &[Temperature, Airflow, Pressure, Energy],
        ),
        (
            "plant-chiller",
            "Chiller Plant Room",
            &[Temperature, Pressure, Energy],
        ),
    ];

    table
        .iter()
        .map(|(asset_id, display_name, channels)| SeedAsset {
            asset_id: (*asset_id).to_string(),
            display_name: (*display_name).to_string(),
            channels: channels.to_vec(),
        })
        .collect()
}

/// Load a seed fleet from a TOML file.
///
/// Expected shape:
/// ```toml
/// [[assets]]
/// asset_id = "zone-l1-north"
/// display_name = "Level 1 North Zone"
/// channels = ["temperature", "co2"]
/// ```
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedAsset>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let parsed: SeedFile = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(parsed.assets)
}
