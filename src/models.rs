// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Response bodies returned by the REST API. All types derive `Serialize`
//! and `ToSchema` for JSON handling and OpenAPI documentation.
//!
//! Amounts are decimal strings (`"1.234560"`), never floats, so 256-bit
//! token balances render exactly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token balance of a wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct WalletBalanceResponse {
    /// Balance scaled by the token's decimals, e.g. `"1.234560"`.
    #[schema(example = "1.234560")]
    pub balance: String,
}

/// Token transfer carried by a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Sender in the network's native address format.
    pub from: String,
    /// Recipient in the network's native address format.
    pub to: String,
    /// Transferred amount scaled by the token's decimals.
    #[schema(example = "25.000000")]
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_response_field_names() {
        let resp = TransactionResponse {
            from: "TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD".into(),
            to: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".into(),
            amount: "15.500000".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["from"], "TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD");
        assert_eq!(json["to"], "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
        assert_eq!(json["amount"], "15.500000");
    }

    #[test]
    fn balance_is_a_string() {
        let json = serde_json::to_string(&WalletBalanceResponse {
            balance: "0.000000".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"balance":"0.000000"}"#);
    }
}
