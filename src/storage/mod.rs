// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Balance Cache Storage
//!
//! Formatted wallet balances are cached for a fixed TTL so repeated lookups
//! of the same address skip the chain.
//!
//! ## Backends
//!
//! - **Redis**: shared between instances, key `wallet_balance:<address>`,
//!   expiry handled by the server (`SET .. EX`)
//! - **Memory**: in-process LRU, used when no Redis host is configured
//!
//! Keys are the address exactly as the caller supplied it. No case folding
//! is applied, so differently-cased EVM spellings are cached separately.

pub mod balance_cache;
pub mod memory;
pub mod redis_cache;

pub use balance_cache::{BalanceCache, BalanceStore, CacheError};
pub use memory::{MemoryBalanceCache, DEFAULT_CAPACITY};
pub use redis_cache::{RedisBalanceCache, RedisSettings};
