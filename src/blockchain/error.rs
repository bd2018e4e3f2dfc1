// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Errors raised while classifying identifiers and reading chain state.

/// Kind of identifier a classification was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Address,
    Hash,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Address => f.write_str("address"),
            IdentifierKind::Hash => f.write_str("hash"),
        }
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("unable to detect the network by {0}")]
    Unrecognized(IdentifierKind),

    #[error("unknown token: {0}")]
    UnsupportedToken(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid transaction hash: {0}")]
    InvalidHash(String),

    #[error("Invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Unexpected or non-matching on-chain payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("transaction not found")]
    TransactionNotFound,

    #[error("the transaction does not involve in requested token transfers")]
    NotThisToken,

    #[error("not a transfer method")]
    NotTransferMethod,

    #[error("unknown input data")]
    UnknownInputData,

    #[error("balanceOf method has no result")]
    EmptyResult,

    #[error("failed to get contract")]
    MissingContract,

    #[error("failed to get parameter of contract")]
    MissingParameter,

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl DecodeError {
    /// Whether this is an expected outcome for an arbitrary hash (the
    /// transaction exists but is not a transfer of the requested token).
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            DecodeError::NotThisToken | DecodeError::NotTransferMethod
        )
    }
}
