// src/telemetry.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
/// Returns `false` when the host application already installed one.
pub fn init_tracing() -> bool {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
        return false;
    }
    true
}
