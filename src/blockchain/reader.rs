// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only token queries shared by every supported network.

use std::future::Future;

use super::error::ChainError;
use super::types::TransferRecord;
use crate::context::RequestContext;

/// Token balance and transfer lookups against one network.
///
/// Implementations hold a long-lived connection that is safe to use from
/// concurrent requests; every remote call runs under `ctx`.
pub trait ChainReader: Send + Sync {
    /// Balance of `address` in `token`, formatted with the token's decimals.
    fn balance(
        &self,
        ctx: &RequestContext,
        address: &str,
        token: &str,
    ) -> impl Future<Output = Result<String, ChainError>> + Send;

    /// Decode the `token` transfer carried by transaction `hash`.
    fn transaction(
        &self,
        ctx: &RequestContext,
        hash: &str,
        token: &str,
    ) -> impl Future<Output = Result<TransferRecord, ChainError>> + Send;
}
