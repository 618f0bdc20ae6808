use super::*;
use crate::reading::classify;
use std::sync::atomic::{AtomicUsize, Ordering};

fn quiet_config() -> EngineConfig {
    EngineConfig {
        tick_interval: Duration::from_secs(1),
        simulate_latency: false,
        seed_file: None,
    }
}

#[tokio::test]
async fn test_seed_and_lookup() {
    let engine = TelemetryEngine::new(quiet_config());
    engine.add_asset(
        "A1",
        "Pump-01",
        &[ChannelKind::Temperature, ChannelKind::Pressure],
    );

    let asset = engine.get_one("A1").await.unwrap();
    assert_eq!(asset.readings.len(), 2);
    for (kind, reading) in &asset.readings {
        let p = engine.profile(*kind);
        assert!((p.min_value..=p.max_value).contains(&reading.value));
        assert_eq!(reading.severity, classify(reading.value, p));
    }
}

#[tokio::test]
async fn test_initialize_seeds_and_starts() {
    let engine = TelemetryEngine::new(quiet_config());
    engine.initialize().await.unwrap();

    assert!(!engine.all_ids().is_empty());
    assert!(engine.has("ahu-01"));

    engine.stop().await;
}

#[tokio::test]
async fn test_initialize_with_seed_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[assets]]
asset_id = "custom-01"
display_name = "Custom Asset"
channels = ["energy"]
"#
    )
    .unwrap();

    let config = EngineConfig {
        seed_file: Some(file.path().to_path_buf()),
        ..quiet_config()
    };
    let engine = TelemetryEngine::new(config);
    engine.initialize().await.unwrap();

    assert_eq!(engine.all_ids(), vec!["custom-01".to_string()]);
    assert!(!engine.has("ahu-01"));

    engine.stop().await;
}

#[tokio::test]
async fn test_bulk_query_partial_match() {
    let engine = TelemetryEngine::new(quiet_config());
    engine.add_asset("A1", "Pump-01", &[ChannelKind::Temperature]);

    let result = engine
        .get_many(&["A1".to_string(), "unknown".to_string()])
        .await;
    assert_eq!(result.len(), 1);
    assert!(result.contains_key("A1"));
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_sees_ticks_until_cancel() {
    let engine = TelemetryEngine::new(quiet_config());
    engine.add_asset("A1", "Pump-01", &[ChannelKind::Temperature]);

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_cb = Arc::clone(&hits);
    let handle = engine.subscribe(
        "A1",
        Box::new(move |_| {
            hits_cb.fetch_add(1, Ordering::SeqCst);
        }),
    );

    engine.start(Duration::from_secs(1)).await;
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    handle.cancel();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    engine.stop().await;
}

#[tokio::test]
async fn test_history_through_engine() {
    let engine = TelemetryEngine::new(quiet_config());
    let points = engine.get_history("A1", ChannelKind::Temperature, 24).await;
    assert_eq!(points.len(), 97);
}

#[tokio::test]
async fn test_profile_exposed_for_rendering() {
    let engine = TelemetryEngine::new(quiet_config());
    let p = engine.profile(ChannelKind::Humidity);
    assert_eq!(p.unit, "%");
    assert_eq!((p.min_value, p.max_value), (20.0, 80.0));
}

#[tokio::test]
async fn test_independent_instances() {
    let a = TelemetryEngine::new(quiet_config());
    let b = TelemetryEngine::new(quiet_config());

    a.add_asset("A1", "only in a", &[ChannelKind::Energy]);
    assert!(a.has("A1"));
    assert!(!b.has("A1"));
}
