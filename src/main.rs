// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crypto_service::{
    api::router,
    blockchain::{EvmReader, TronReader},
    config::{AppConfig, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV},
    service::QueryService,
    state::AppState,
    storage::{BalanceStore, MemoryBalanceCache, RedisBalanceCache, DEFAULT_CAPACITY},
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

/// Resolves on SIGINT or SIGTERM and cancels `token`, which every in-flight
/// request context derives from.
async fn shutdown_signal(token: CancellationToken) {
    #[cfg(unix)]
    {
        let ctrl_c = tokio::signal::ctrl_c();
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => tracing::info!("SIGTERM received, shutting down"),
                    _ = ctrl_c => tracing::info!("SIGINT received, shutting down"),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to register SIGTERM handler");
                let _ = ctrl_c.await;
                tracing::info!("SIGINT received, shutting down");
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Ctrl+C received, shutting down");
    }

    token.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let evm = EvmReader::connect(&config.ethereum_rpc_endpoint).await?;
    let tron = TronReader::connect(&config.tron_rpc_endpoint).await?;
    let cache = match &config.redis {
        Some(settings) => {
            BalanceStore::Redis(RedisBalanceCache::connect(settings, config.wallet_balance_ttl).await?)
        }
        None => {
            tracing::info!("CACHE_HOST not set, using in-memory balance cache");
            BalanceStore::Memory(MemoryBalanceCache::new(
                DEFAULT_CAPACITY,
                config.wallet_balance_ttl,
            ))
        }
    };

    let shutdown = CancellationToken::new();
    let state = AppState::new(
        QueryService::new(evm, tron, cache),
        config.request_timeout,
        shutdown.clone(),
    );
    let service = Arc::clone(&state.service);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Crypto service listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    // The router and its state clones are gone once serve has drained.
    match Arc::try_unwrap(service) {
        Ok(service) => service.shutdown(),
        Err(_) => tracing::warn!("Query service still referenced, skipping connection shutdown"),
    }

    tracing::info!("Crypto service shut down cleanly");
    Ok(())
}
