// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::{error::ApiError, models::WalletBalanceResponse, state::AppState};

/// USDT balance of an Ethereum (`0x…`) or Tron (`T…`) address.
#[utoipa::path(
    get,
    path = "/api/wallet/{address}",
    tag = "Wallet",
    params(("address" = String, Path, description = "Ethereum or Tron wallet address")),
    responses(
        (status = 200, description = "Wallet balance", body = WalletBalanceResponse),
        (status = 400, description = "Address does not belong to a supported network"),
        (status = 502, description = "Node call failed"),
        (status = 504, description = "Request deadline exceeded")
    )
)]
pub async fn get_wallet_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(address): Path<String>,
) -> Result<Json<WalletBalanceResponse>, ApiError> {
    let ctx = state.request_context(&headers);
    tracing::info!(request_id = %ctx.request_id, address = %address, "Getting wallet balance");

    let response = state
        .service
        .get_wallet_balance(&ctx, &address)
        .await
        .inspect_err(|e| {
            tracing::error!(
                request_id = %ctx.request_id,
                address = %address,
                error = %e,
                "Failed to get wallet balance"
            );
        })?;

    Ok(Json(response))
}
