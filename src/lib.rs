// Channel kinds, severities, and static profiles
pub mod channel;

// Reading generation and classification
pub mod reading;

// On-demand historical series synthesis
pub mod history;

// Live asset state
pub mod registry;

// Per-asset observer fan-out
pub mod subscription;

// Periodic regeneration and notification
pub mod clock;

// Point/bulk/history read API
pub mod query;

// Engine configuration
pub mod config;

// Seed fleet data
pub mod seed;

// External-facing engine instance
pub mod engine;

pub use engine::TelemetryEngine;
