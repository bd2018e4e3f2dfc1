// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process LRU balance cache.
//!
//! Used when no Redis endpoint is configured (single-instance deployments and
//! tests). Entries carry their insertion time and read as absent once older
//! than the TTL.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

/// Default number of addresses kept before the least recently used is evicted.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Cached entry: formatted balance + insertion timestamp.
struct CacheEntry {
    balance: String,
    inserted_at: Instant,
}

/// In-process LRU cache for wallet balances.
pub struct MemoryBalanceCache {
    cache: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryBalanceCache {
    /// Create a new cache with the given capacity and TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Cached balance for `address`, or `None` if absent or expired.
    ///
    /// Addresses are case-sensitive (Tron base58).
    pub fn get(&self, address: &str) -> Option<String> {
        let mut cache = self.cache.lock().ok()?;
        if let Some(entry) = cache.get(address) {
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(entry.balance.clone());
            }
            cache.pop(address);
        }
        None
    }

    /// Store `balance` for `address`, restarting its TTL.
    pub fn put(&self, address: &str, balance: &str) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(
                address.to_string(),
                CacheEntry {
                    balance: balance.to_string(),
                    inserted_at: Instant::now(),
                },
            );
        }
    }
}
