// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::{error::ApiError, models::TransactionResponse, state::AppState};

/// USDT transfer carried by an Ethereum or Tron transaction.
#[utoipa::path(
    get,
    path = "/api/transaction/{hash}",
    tag = "Transaction",
    params(("hash" = String, Path, description = "Ethereum (0x-prefixed) or Tron transaction hash")),
    responses(
        (status = 200, description = "Transfer details", body = TransactionResponse),
        (status = 400, description = "Hash does not belong to a supported network"),
        (status = 404, description = "Transaction not found"),
        (status = 422, description = "Transaction is not a USDT transfer"),
        (status = 502, description = "Node call failed or payload malformed"),
        (status = 504, description = "Request deadline exceeded")
    )
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hash): Path<String>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let ctx = state.request_context(&headers);
    tracing::info!(request_id = %ctx.request_id, hash = %hash, "Getting transaction");

    let response = state
        .service
        .get_transaction(&ctx, &hash)
        .await
        .inspect_err(|e| {
            tracing::error!(
                request_id = %ctx.request_id,
                hash = %hash,
                error = %e,
                "Failed to get transaction"
            );
        })?;

    Ok(Json(response))
}
