// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Subset of the Tron `protocol` protobuf schema.
//!
//! Field numbers follow `core/Tron.proto`, `core/contract/smart_contract.proto`
//! and `api/api.proto` from the java-tron repository. Only fields the reader
//! touches are declared; prost skips the rest when decoding.

/// `protocol.BytesMessage`
#[derive(Clone, PartialEq, prost::Message)]
pub struct BytesMessage {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

/// `protocol.Transaction`
#[derive(Clone, PartialEq, prost::Message)]
pub struct Transaction {
    #[prost(message, optional, tag = "1")]
    pub raw_data: Option<TransactionRaw>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub signature: Vec<Vec<u8>>,
}

/// `protocol.Transaction.raw`
#[derive(Clone, PartialEq, prost::Message)]
pub struct TransactionRaw {
    #[prost(message, repeated, tag = "11")]
    pub contract: Vec<Contract>,
}

/// `protocol.Transaction.Contract`
#[derive(Clone, PartialEq, prost::Message)]
pub struct Contract {
    /// `ContractType` enum; 31 is `TriggerSmartContract`
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "2")]
    pub parameter: Option<prost_types::Any>,
}

/// `protocol.TriggerSmartContract`
#[derive(Clone, PartialEq, prost::Message)]
pub struct TriggerSmartContract {
    #[prost(bytes = "vec", tag = "1")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub contract_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub call_value: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,
}

/// `protocol.TransactionExtention`
#[derive(Clone, PartialEq, prost::Message)]
pub struct TransactionExtention {
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub constant_result: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "4")]
    pub result: Option<Return>,
}

/// `protocol.Return`
#[derive(Clone, PartialEq, prost::Message)]
pub struct Return {
    #[prost(bool, tag = "1")]
    pub result: bool,
    /// `response_code`; 0 is `SUCCESS`
    #[prost(int32, tag = "2")]
    pub code: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub message: Vec<u8>,
}

/// `type_url` of a packed `TriggerSmartContract` parameter.
pub const TRIGGER_SMART_CONTRACT_TYPE_URL: &str =
    "type.googleapis.com/protocol.TriggerSmartContract";

/// `ContractType.TriggerSmartContract`
pub const TRIGGER_SMART_CONTRACT: i32 = 31;

/// gRPC method paths on the `protocol.Wallet` service.
pub mod wallet {
    pub const GET_TRANSACTION_BY_ID: &str = "/protocol.Wallet/GetTransactionById";
    pub const TRIGGER_CONSTANT_CONTRACT: &str = "/protocol.Wallet/TriggerConstantContract";
}
