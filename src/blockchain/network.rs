// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network detection from the shape of an address or transaction hash.
//!
//! Purely syntactic: no checksum or character-set validation happens here.
//! Malformed input that still has the right shape fails later, in the chain
//! reader that tries to parse it.

use super::error::{ChainError, IdentifierKind};
use super::types::Network;

/// Detect the network of a wallet address.
///
/// - `0x` + 40 characters (42 total) is an Ethereum address
/// - `T` + 33 characters (34 total) is a Tron base58 address
pub fn classify_address(address: &str) -> Result<Network, ChainError> {
    if address.starts_with("0x") && address.len() == 42 {
        return Ok(Network::Evm);
    }

    if address.starts_with('T') && address.len() == 34 {
        return Ok(Network::Tron);
    }

    Err(ChainError::Unrecognized(IdentifierKind::Address))
}

/// Detect the network of a transaction hash.
///
/// - `0x` + 64 characters (66 total) is an Ethereum hash
/// - any 64 characters is a Tron transaction id
pub fn classify_hash(hash: &str) -> Result<Network, ChainError> {
    if hash.starts_with("0x") && hash.len() == 66 {
        return Ok(Network::Evm);
    }

    if hash.len() == 64 {
        return Ok(Network::Tron);
    }

    Err(ChainError::Unrecognized(IdentifierKind::Hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_examples() {
        assert_eq!(
            classify_address("0xe983fD1798689eee00c0Fb77e79B8f372DF41060").unwrap(),
            Network::Evm
        );
        assert_eq!(
            classify_address("TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD").unwrap(),
            Network::Tron
        );
        assert!(matches!(
            classify_address("abc"),
            Err(ChainError::Unrecognized(IdentifierKind::Address))
        ));
    }

    #[test]
    fn address_length_must_match_prefix() {
        // Right prefix, wrong length.
        assert!(classify_address("0xe983fD1798689eee00c0Fb77e79B8f372DF4106").is_err());
        assert!(classify_address("TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpDx").is_err());
        // Right length, wrong prefix.
        assert!(classify_address("1xe983fD1798689eee00c0Fb77e79B8f372DF41060").is_err());
        assert!(classify_address("ALSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD").is_err());
        assert!(classify_address("").is_err());
    }

    #[test]
    fn hash_examples() {
        assert_eq!(
            classify_hash("0xec1d31abdcb80d24d0d823b35f93ed30c837d26364928e3b1b97b3c1cdd7fe69")
                .unwrap(),
            Network::Evm
        );
        assert_eq!(
            classify_hash("d6d1cc1ab403bc0febfb69d7be0bd8bd2fc03e2a03c4e2bdfd74560bd66109be")
                .unwrap(),
            Network::Tron
        );
        assert!(matches!(
            classify_hash("0x1234"),
            Err(ChainError::Unrecognized(IdentifierKind::Hash))
        ));
    }

    #[test]
    fn hash_of_64_chars_is_tron_regardless_of_prefix() {
        let prefixed = format!("0x{}", "a".repeat(62));
        assert_eq!(prefixed.len(), 64);
        assert_eq!(classify_hash(&prefixed).unwrap(), Network::Tron);
    }

    #[test]
    fn an_address_is_not_a_hash() {
        let evm_address = "0xe983fD1798689eee00c0Fb77e79B8f372DF41060";
        assert!(classify_hash(evm_address).is_err());

        let evm_hash = "0xec1d31abdcb80d24d0d823b35f93ed30c837d26364928e3b1b97b3c1cdd7fe69";
        assert!(classify_address(evm_hash).is_err());
    }
}
