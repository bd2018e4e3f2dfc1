// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet balance cache consulted before any chain read.
//!
//! `Ok(None)` means "not cached" (never written, or expired) and must trigger
//! a live read. It never stands for a zero balance.

use std::future::Future;

use super::memory::MemoryBalanceCache;
use super::redis_cache::RedisBalanceCache;
use crate::blockchain::ChainError;
use crate::context::RequestContext;

/// Cache storage errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Invalid cache configuration: {0}")]
    Config(String),

    #[error("Cache error: {0}")]
    Redis(String),

    #[error(transparent)]
    Interrupted(#[from] ChainError),
}

/// TTL-bounded store of formatted wallet balances keyed by address.
pub trait BalanceCache: Send + Sync {
    fn get(
        &self,
        ctx: &RequestContext,
        address: &str,
    ) -> impl Future<Output = Result<Option<String>, CacheError>> + Send;

    /// Store `balance`, (re)starting the configured TTL.
    fn put(
        &self,
        ctx: &RequestContext,
        address: &str,
        balance: &str,
    ) -> impl Future<Output = Result<(), CacheError>> + Send;
}

/// Configured cache backend.
pub enum BalanceStore {
    Redis(RedisBalanceCache),
    Memory(MemoryBalanceCache),
}

impl BalanceStore {
    pub fn backend(&self) -> &'static str {
        match self {
            BalanceStore::Redis(_) => "redis",
            BalanceStore::Memory(_) => "memory",
        }
    }

    /// Release the backend's connection, if any.
    pub fn shutdown(self) {
        match self {
            BalanceStore::Redis(cache) => cache.shutdown(),
            BalanceStore::Memory(_) => {}
        }
    }
}

impl BalanceCache for BalanceStore {
    async fn get(
        &self,
        ctx: &RequestContext,
        address: &str,
    ) -> Result<Option<String>, CacheError> {
        let cached = match self {
            BalanceStore::Redis(cache) => ctx.run(cache.get(address)).await?,
            BalanceStore::Memory(cache) => cache.get(address),
        };

        if cached.is_some() {
            tracing::info!(
                request_id = %ctx.request_id,
                address = %address,
                "Loaded wallet balance from cache"
            );
        }
        Ok(cached)
    }

    async fn put(
        &self,
        ctx: &RequestContext,
        address: &str,
        balance: &str,
    ) -> Result<(), CacheError> {
        match self {
            BalanceStore::Redis(cache) => ctx.run(cache.put(address, balance)).await?,
            BalanceStore::Memory(cache) => cache.put(address, balance),
        }

        tracing::info!(
            request_id = %ctx.request_id,
            address = %address,
            "Saved wallet balance to cache"
        );
        Ok(())
    }
}
