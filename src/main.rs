//! Simplecache demo
//!
//! Walks through both cache variants: insert-if-absent writes, a stale read
//! before the sweep, and expiry after it.

use std::time::Duration;

use chrono::TimeDelta;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simplecache::{Cache, CacheConfig, TtlCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simplecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: sweep_interval={:?}",
        config.sweep_interval()
    );

    // Plain cache
    let plain = Cache::new();
    plain.set("greeting", "hello").await;
    plain.set("greeting", "ignored").await;
    info!("plain get(greeting) = {:?}", plain.get("greeting").await);
    info!("plain delete(greeting) = {}", plain.delete("greeting").await);
    info!("plain delete(greeting) again = {}", plain.delete("greeting").await);

    // TTL cache
    let cache = TtlCache::with_config(&config);
    cache.set("session", "abc123", TimeDelta::milliseconds(100)).await;
    info!("ttl get(session) = {}", cache.get("session").await?);

    tokio::time::sleep(Duration::from_millis(150)).await;
    match cache.get("session").await {
        Ok(value) => info!("ttl get(session) after expiry, before sweep = {}", value),
        Err(e) => info!("ttl get(session) after expiry = {}", e),
    }

    tokio::time::sleep(config.sweep_interval()).await;
    match cache.get("session").await {
        Ok(value) => info!("ttl get(session) after sweep = {}", value),
        Err(e) => info!("ttl get(session) after sweep = {}", e),
    }

    cache.close().await;
    Ok(())
}
