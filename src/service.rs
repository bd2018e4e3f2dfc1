// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Query Service
//!
//! Composes network detection, the balance cache and the chain readers into
//! the two public lookups.
//!
//! ## Balance lookups (cache-aside)
//!
//! 1. Cache hit: returned as-is, no chain is touched.
//! 2. Miss: the address is classified, the matching reader queried, and the
//!    result written back to the cache. A failed write is logged and counted
//!    but never fails the request.
//!
//! A failed cache *read* falls through to a live read.
//!
//! ## Transaction lookups
//!
//! Always live; nothing on this path is cached.

use crate::blockchain::{
    classify_address, classify_hash, ChainError, ChainReader, EvmReader, Network, TronReader,
    USDT,
};
use crate::context::RequestContext;
use crate::metrics;
use crate::models::{TransactionResponse, WalletBalanceResponse};
use crate::storage::{BalanceCache, BalanceStore};

/// Failure of a public lookup, as surfaced to the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Balance and transaction lookups across the supported networks.
pub struct QueryService<E = EvmReader, T = TronReader, C = BalanceStore> {
    evm: E,
    tron: T,
    cache: C,
    token: &'static str,
}

impl<E, T, C> QueryService<E, T, C>
where
    E: ChainReader,
    T: ChainReader,
    C: BalanceCache,
{
    /// Serve USDT lookups through the given readers and cache.
    pub fn new(evm: E, tron: T, cache: C) -> Self {
        Self {
            evm,
            tron,
            cache,
            token: USDT,
        }
    }

    /// Token balance of `address`, served from cache when fresh.
    pub async fn get_wallet_balance(
        &self,
        ctx: &RequestContext,
        address: &str,
    ) -> Result<WalletBalanceResponse, QueryError> {
        match self.cache.get(ctx, address).await {
            Ok(Some(balance)) => {
                metrics::inc_balance_cache_hit();
                return Ok(WalletBalanceResponse { balance });
            }
            Ok(None) => {}
            Err(e) => {
                metrics::inc_cache_error("get");
                tracing::warn!(
                    request_id = %ctx.request_id,
                    address = %address,
                    error = %e,
                    "Failed to get wallet balance from cache, reading chain"
                );
            }
        }

        let network = classify_address(address).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, address = %address, error = %e, "Unrecognized address");
        })?;

        let balance = match network {
            Network::Evm => self.evm.balance(ctx, address, self.token).await?,
            Network::Tron => self.tron.balance(ctx, address, self.token).await?,
        };
        metrics::inc_balance_chain_read(network.as_str());

        if let Err(e) = self.cache.put(ctx, address, &balance).await {
            metrics::inc_cache_error("put");
            tracing::warn!(
                request_id = %ctx.request_id,
                address = %address,
                error = %e,
                "Failed to save wallet balance to cache"
            );
        }

        Ok(WalletBalanceResponse { balance })
    }

    /// Sender, recipient and amount of the token transfer in `hash`.
    pub async fn get_transaction(
        &self,
        ctx: &RequestContext,
        hash: &str,
    ) -> Result<TransactionResponse, QueryError> {
        let network = classify_hash(hash).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, hash = %hash, error = %e, "Unrecognized hash");
        })?;

        let result = match network {
            Network::Evm => self.evm.transaction(ctx, hash, self.token).await,
            Network::Tron => self.tron.transaction(ctx, hash, self.token).await,
        };

        let record = match result {
            Ok(record) => {
                metrics::inc_transaction_lookup(network.as_str(), "ok");
                record
            }
            Err(e) => {
                let outcome = match &e {
                    ChainError::Decode(d) if d.is_benign() => "not_transfer",
                    _ => "error",
                };
                metrics::inc_transaction_lookup(network.as_str(), outcome);
                return Err(e.into());
            }
        };

        Ok(TransactionResponse {
            from: record.from,
            to: record.to,
            amount: record.amount,
        })
    }
}

impl QueryService<EvmReader, TronReader, BalanceStore> {
    /// Name of the configured cache backend.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    /// Close all three long-lived connections. Must run after in-flight
    /// requests have drained.
    pub fn shutdown(self) {
        self.evm.shutdown();
        self.tron.shutdown();
        self.cache.shutdown();
    }
}
