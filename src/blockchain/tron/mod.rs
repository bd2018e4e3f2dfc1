// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tron (TRC-20) reader over the full node's gRPC `Wallet` service.
//!
//! Tron does not ABI-encode its transaction envelope: a contract invocation is
//! a `TriggerSmartContract` message packed into the transaction's first
//! contract parameter. The call data inside it does follow the EVM layout
//! (4-byte selector followed by 32-byte words), so balance payloads are built
//! by hand at fixed offsets instead of through an ABI encoder.

pub mod address;
pub mod proto;

use alloy::primitives::U256;
use prost::Message;
use tonic::{
    client::Grpc,
    codec::ProstCodec,
    codegen::http::uri::PathAndQuery,
    transport::{Channel, Endpoint},
};

use super::amount::format_amount;
use super::error::{ChainError, DecodeError};
use super::reader::ChainReader;
use super::types::{token_descriptor, Network, TokenDescriptor, TransferRecord};
use crate::context::RequestContext;

/// Selector + recipient word + amount word.
const TRANSFER_CALL_LEN: usize = 4 + 32 + 32;

/// Tron full node gRPC reader.
pub struct TronReader {
    channel: Channel,
}

impl TronReader {
    /// Open the gRPC channel. `endpoint` may omit the scheme
    /// (`grpc.trongrid.io:50051`). Only plaintext HTTP/2 is supported.
    pub async fn connect(endpoint: &str) -> Result<Self, ChainError> {
        tracing::info!("Initializing Tron gRPC connection");

        let channel = parse_endpoint(endpoint)?.connect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to Tron");
            ChainError::Rpc(e.to_string())
        })?;

        Ok(Self { channel })
    }

    /// Open the channel on first use instead of up front.
    pub fn lazy(endpoint: &str) -> Result<Self, ChainError> {
        Ok(Self {
            channel: parse_endpoint(endpoint)?.connect_lazy(),
        })
    }

    /// Close the gRPC channel.
    pub fn shutdown(self) {
        tracing::info!("Shutting down Tron gRPC connection");
        drop(self.channel);
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, ChainError>
    where
        Req: Message + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let mut grpc = Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| ChainError::Rpc(format!("service not ready: {e}")))?;

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await
            .map_err(|status| ChainError::Rpc(status.to_string()))?;

        Ok(response.into_inner())
    }
}

/// Plaintext HTTP/2 only: the channel is built without a TLS connector.
fn parse_endpoint(endpoint: &str) -> Result<Endpoint, ChainError> {
    let uri = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    };
    let endpoint =
        Endpoint::from_shared(uri).map_err(|e| ChainError::InvalidEndpoint(e.to_string()))?;

    if endpoint.uri().scheme_str() != Some("http") {
        return Err(ChainError::InvalidEndpoint(format!(
            "unsupported scheme in {}, only plaintext http is available",
            endpoint.uri()
        )));
    }
    Ok(endpoint)
}

impl ChainReader for TronReader {
    async fn balance(
        &self,
        ctx: &RequestContext,
        addr: &str,
        token: &str,
    ) -> Result<String, ChainError> {
        let token = token_descriptor(Network::Tron, token).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "Unsupported TRC-20 token");
        })?;

        let owner = address::decode_base58(addr).inspect_err(|e| {
            tracing::error!(
                request_id = %ctx.request_id,
                address = %addr,
                error = %e,
                "Failed to convert address to 21 bytes format"
            );
        })?;
        let contract = address::decode_base58(token.contract_address)?;

        let request = proto::TriggerSmartContract {
            owner_address: owner.to_vec(),
            contract_address: contract.to_vec(),
            call_value: 0,
            data: balance_call_data(token, &owner),
        };

        let extension: proto::TransactionExtention = ctx
            .run(self.unary(proto::wallet::TRIGGER_CONSTANT_CONTRACT, request))
            .await
            .inspect_err(|e| {
                tracing::error!(
                    request_id = %ctx.request_id,
                    address = %addr,
                    error = %e,
                    "Failed to invoke contract with balanceOf method"
                );
            })?;

        let raw = constant_result(&extension).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, address = %addr, error = %e, "Unusable balanceOf result");
        })?;

        Ok(format_amount(raw, token.decimals))
    }

    async fn transaction(
        &self,
        ctx: &RequestContext,
        hash: &str,
        token: &str,
    ) -> Result<TransferRecord, ChainError> {
        let token = token_descriptor(Network::Tron, token).inspect_err(|e| {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "Unsupported TRC-20 token");
        })?;

        let id = alloy::hex::decode(hash).map_err(|e| ChainError::InvalidHash(e.to_string()))?;

        let tx: proto::Transaction = ctx
            .run(self.unary(
                proto::wallet::GET_TRANSACTION_BY_ID,
                proto::BytesMessage { value: id },
            ))
            .await
            .inspect_err(|e| {
                tracing::error!(
                    request_id = %ctx.request_id,
                    hash = %hash,
                    error = %e,
                    "Failed to get transaction by hash"
                );
            })?;

        transfer_from_transaction(token, hash, &tx)
            .map_err(ChainError::from)
            .inspect_err(|e| {
                tracing::warn!(request_id = %ctx.request_id, hash = %hash, error = %e, "Not a token transfer");
            })
    }
}

/// `balanceOf(owner)` call data: selector followed by the owner's ABI word.
fn balance_call_data(token: &TokenDescriptor, owner: &[u8; address::ADDRESS_LEN]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&token.balance_selector);
    data.extend_from_slice(&address::to_abi_word(owner));
    data
}

/// First constant result of a `TriggerConstantContract` response.
fn constant_result(extension: &proto::TransactionExtention) -> Result<U256, ChainError> {
    if let Some(ret) = &extension.result {
        if ret.code != 0 {
            return Err(ChainError::Rpc(String::from_utf8_lossy(&ret.message).into_owned()));
        }
    }

    let first = extension
        .constant_result
        .first()
        .ok_or(DecodeError::EmptyResult)?;

    U256::try_from_be_slice(first)
        .ok_or_else(|| DecodeError::Malformed(format!("{}-byte balance", first.len())).into())
}

/// Extract the token transfer carried by a Tron transaction.
fn transfer_from_transaction(
    token: &TokenDescriptor,
    hash: &str,
    tx: &proto::Transaction,
) -> Result<TransferRecord, DecodeError> {
    // The node answers unknown ids with an empty message rather than an error.
    if tx.encoded_len() == 0 {
        return Err(DecodeError::TransactionNotFound);
    }

    let contract = tx
        .raw_data
        .as_ref()
        .and_then(|raw| raw.contract.first())
        .ok_or(DecodeError::MissingContract)?;

    let parameter = contract
        .parameter
        .as_ref()
        .ok_or(DecodeError::MissingParameter)?;

    if contract.r#type != proto::TRIGGER_SMART_CONTRACT {
        return Err(DecodeError::NotThisToken);
    }

    let trigger = proto::TriggerSmartContract::decode(parameter.value.as_slice())
        .map_err(|e| DecodeError::Malformed(format!("contract parameter: {e}")))?;

    if address::encode_base58(&trigger.contract_address) != token.contract_address {
        return Err(DecodeError::NotThisToken);
    }

    let input = trigger.data.as_slice();
    if input.len() != TRANSFER_CALL_LEN {
        return Err(DecodeError::UnknownInputData);
    }

    if input[..4] != token.transfer_selector {
        return Err(DecodeError::NotTransferMethod);
    }

    let params = &input[4..];
    let amount = U256::from_be_slice(&params[32..64]);

    Ok(TransferRecord {
        hash: hash.to_string(),
        from: address::encode_base58(&trigger.owner_address),
        to: address::from_abi_word(&params[..32]),
        amount: format_amount(amount, token.decimals),
    })
}
