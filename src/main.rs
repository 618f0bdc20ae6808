use anyhow::Result;
use pulse::config::EngineConfig;
use pulse::TelemetryEngine;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info".into()),
        )
        .init();

    info!("Pulse starting...");

    let engine = Arc::new(TelemetryEngine::new(EngineConfig::from_env()));
    engine.initialize().await?;

    // Log every update for the first seeded asset as a demo observer
    let ids = engine.all_ids();
    let handle = ids.first().map(|asset_id| {
        engine.subscribe(
            asset_id,
            Box::new(|asset| {
                let readings = serde_json::to_string(&asset.readings)
                    .unwrap_or_else(|_| "<unserializable>".to_string());
                info!(
                    asset_id = %asset.asset_id,
                    alerting = asset.has_alert(),
                    readings = %readings,
                    "Tick"
                );
            }),
        )
    });

    info!(assets = ids.len(), "Engine running, press ctrl-c to stop");
    tokio::signal::ctrl_c().await?;

    if let Some(handle) = handle {
        handle.cancel();
    }
    engine.stop().await;
    info!(
        ticks = engine.stats().total_ticks(),
        readings = engine.stats().total_readings(),
        "Pulse stopped"
    );

    Ok(())
}
