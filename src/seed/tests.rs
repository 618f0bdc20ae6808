use super::*;
use std::io::Write;

#[test]
fn test_default_seed_nonempty_and_wellformed() {
    let seed = default_seed();
    assert!(!seed.is_empty());

    for asset in &seed {
        assert!(!asset.asset_id.is_empty());
        assert!(!asset.channels.is_empty());
    }

    // IDs are unique
    let mut ids: Vec<_> = seed.iter().map(|a| a.asset_id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), seed.len());
}

#[test]
fn test_load_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[assets]]
asset_id = "pump-01"
display_name = "Pump 01"
channels = ["temperature", "pressure"]

[[assets]]
asset_id = "ahu-09"
display_name = "AHU 09"
channels = ["airflow"]
"#
    )
    .unwrap();

    let seed = load_seed_file(file.path()).unwrap();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].asset_id, "pump-01");
    assert_eq!(
        seed[0].channels,
        vec![ChannelKind::Temperature, ChannelKind::Pressure]
    );
    assert_eq!(seed[1].channels, vec![ChannelKind::Airflow]);
}

#[test]
fn test_load_seed_file_empty_is_ok() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let seed = load_seed_file(file.path()).unwrap();
    assert!(seed.is_empty());
}

#[test]
fn test_load_seed_file_missing_path_errors() {
    let err = load_seed_file(Path::new("/nonexistent/seed.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read seed file"));
}

#[test]
fn test_load_seed_file_unknown_channel_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[assets]]
asset_id = "pump-01"
display_name = "Pump 01"
channels = ["magnetometer"]
"#
    )
    .unwrap();

    assert!(load_seed_file(file.path()).is_err());
}
