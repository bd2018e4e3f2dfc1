// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ethereum (ERC-20) reader.
//!
//! Balances come from an `eth_call` to `balanceOf`. Transfers are decoded
//! from the transaction's call data; the sender is recovered from the
//! signature because Ethereum transactions do not carry it in plaintext.

use std::str::FromStr;

use alloy::{
    consensus::{transaction::SignerRecoverable, Transaction as _, TxEnvelope},
    primitives::{Address, B256, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};

use super::amount::format_amount;
use super::error::{ChainError, DecodeError};
use super::reader::ChainReader;
use super::types::{token_descriptor, Network, TokenDescriptor, TransferRecord};
use crate::context::RequestContext;

sol! {
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address recipient, uint256 amount) external returns (bool);
    }
}

/// Ethereum JSON-RPC reader.
pub struct EvmReader {
    provider: DynProvider,
}

impl EvmReader {
    /// Connect to the JSON-RPC endpoint and verify it answers.
    pub async fn connect(rpc_url: &str) -> Result<Self, ChainError> {
        tracing::info!("Initializing Ethereum RPC connection");

        let reader = Self::lazy(rpc_url)?;
        let chain_id = reader.provider.get_chain_id().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to Ethereum");
            ChainError::Rpc(e.to_string())
        })?;
        tracing::info!(chain_id, "Connected to Ethereum");

        Ok(reader)
    }

    /// Build the provider without contacting the node.
    pub fn lazy(rpc_url: &str) -> Result<Self, ChainError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainError::InvalidEndpoint(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self { provider })
    }

    /// Release the RPC connection.
    pub fn shutdown(self) {
        tracing::info!("Shutting down Ethereum RPC connection");
        drop(self.provider);
    }
}

impl ChainReader for EvmReader {
    async fn balance(
        &self,
        ctx: &RequestContext,
        address: &str,
        token: &str,
    ) -> Result<String, ChainError> {
        let token = token_descriptor(Network::Evm, token).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "Unsupported ERC-20 token");
        })?;

        let account = Address::from_str(address)
            .map_err(|e| ChainError::InvalidAddress(e.to_string()))?;
        let contract = token_contract(token)?;

        let call = IERC20::balanceOfCall { account };
        let request = TransactionRequest::default()
            .to(contract)
            .input(call.abi_encode().into());

        let output = ctx
            .run(async {
                self.provider
                    .call(request)
                    .await
                    .map_err(|e| ChainError::Rpc(e.to_string()))
            })
            .await
            .inspect_err(|e| {
                tracing::error!(
                    request_id = %ctx.request_id,
                    address = %address,
                    error = %e,
                    "Failed to invoke balanceOf"
                );
            })?;

        let raw: U256 = IERC20::balanceOfCall::abi_decode_returns(&output).map_err(|e| {
            tracing::error!(request_id = %ctx.request_id, error = %e, "Failed to decode balanceOf result");
            DecodeError::Malformed(format!("balanceOf result: {e}"))
        })?;

        Ok(format_amount(raw, token.decimals))
    }

    async fn transaction(
        &self,
        ctx: &RequestContext,
        hash: &str,
        token: &str,
    ) -> Result<TransferRecord, ChainError> {
        let token = token_descriptor(Network::Evm, token).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "Unsupported ERC-20 token");
        })?;

        let tx_hash = B256::from_str(hash).map_err(|e| ChainError::InvalidHash(e.to_string()))?;

        let tx = ctx
            .run(async {
                self.provider
                    .get_transaction_by_hash(tx_hash)
                    .await
                    .map_err(|e| ChainError::Rpc(e.to_string()))
            })
            .await
            .inspect_err(|e| {
                tracing::error!(
                    request_id = %ctx.request_id,
                    hash = %hash,
                    error = %e,
                    "Failed to get transaction by hash"
                );
            })?
            .ok_or(DecodeError::TransactionNotFound)?;

        transfer_from_envelope(token, hash, tx.inner.inner()).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, hash = %hash, error = %e, "Not a token transfer");
        })
    }
}

fn token_contract(token: &TokenDescriptor) -> Result<Address, ChainError> {
    Address::from_str(token.contract_address)
        .map_err(|e| ChainError::InvalidAddress(format!("token contract: {e}")))
}

/// Build a transfer record from a signed transaction envelope.
fn transfer_from_envelope(
    token: &TokenDescriptor,
    hash: &str,
    envelope: &TxEnvelope,
) -> Result<TransferRecord, ChainError> {
    let (recipient, amount) = decode_transfer_call(token, envelope.to(), envelope.input())?;

    let sender = envelope
        .recover_signer()
        .map_err(|e| DecodeError::Malformed(format!("sender recovery failed: {e}")))?;

    Ok(TransferRecord {
        hash: hash.to_string(),
        from: sender.to_checksum(None),
        to: format!("{recipient:#x}"),
        amount: format_amount(amount, token.decimals),
    })
}

/// Decode `transfer(recipient, amount)` call data sent to the token contract.
fn decode_transfer_call(
    token: &TokenDescriptor,
    to: Option<Address>,
    input: &[u8],
) -> Result<(Address, U256), DecodeError> {
    let targets_token = to
        .map(|addr| addr.to_string().eq_ignore_ascii_case(token.contract_address))
        .unwrap_or(false);
    if !targets_token {
        return Err(DecodeError::NotThisToken);
    }

    if input.len() < 4 || input[..4] != token.transfer_selector {
        return Err(DecodeError::NotTransferMethod);
    }

    let call = IERC20::transferCall::abi_decode_raw(&input[4..])
        .map_err(|e| DecodeError::Malformed(format!("transfer arguments: {e}")))?;

    Ok((call.recipient, call.amount))
}
