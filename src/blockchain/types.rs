// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and token constants.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use super::error::ChainError;

/// Network a wallet address or transaction hash belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Network {
    /// Ethereum mainnet (ERC-20 tokens).
    #[serde(rename = "ERC20")]
    Evm,
    /// Tron mainnet (TRC-20 tokens).
    #[serde(rename = "TRC20")]
    Tron,
}

impl Network {
    /// Token standard name used in logs and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Evm => "ERC20",
            Network::Tron => "TRC20",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a token deployment on one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// Network the contract is deployed on
    pub network: Network,
    /// Token symbol (e.g., "USDT")
    pub symbol: &'static str,
    /// Contract address in the network's native text form
    /// (lowercase hex for Ethereum, base58check for Tron)
    pub contract_address: &'static str,
    /// `transfer(address,uint256)` selector
    pub transfer_selector: [u8; 4],
    /// `balanceOf(address)` selector
    pub balance_selector: [u8; 4],
    /// Number of decimals
    pub decimals: u8,
}

/// Symbol of the only token served today.
pub const USDT: &str = "USDT";

/// keccak256("transfer(address,uint256)")[..4]
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// keccak256("balanceOf(address)")[..4]
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Tether USD on Ethereum mainnet.
pub const USDT_ERC20: TokenDescriptor = TokenDescriptor {
    network: Network::Evm,
    symbol: USDT,
    contract_address: "0xdac17f958d2ee523a2206206994597c13d831ec7",
    transfer_selector: TRANSFER_SELECTOR,
    balance_selector: BALANCE_OF_SELECTOR,
    decimals: 6,
};

/// Tether USD on Tron mainnet.
pub const USDT_TRC20: TokenDescriptor = TokenDescriptor {
    network: Network::Tron,
    symbol: USDT,
    contract_address: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
    transfer_selector: TRANSFER_SELECTOR,
    balance_selector: BALANCE_OF_SELECTOR,
    decimals: 6,
};

/// Every supported (network, symbol) pair.
pub const TOKENS: &[TokenDescriptor] = &[USDT_ERC20, USDT_TRC20];

/// Look up the descriptor for `symbol` on `network`.
pub fn token_descriptor(
    network: Network,
    symbol: &str,
) -> Result<&'static TokenDescriptor, ChainError> {
    TOKENS
        .iter()
        .find(|t| t.network == network && t.symbol == symbol)
        .ok_or_else(|| ChainError::UnsupportedToken(symbol.to_string()))
}

/// Canonical transfer extracted from an on-chain transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    /// Transaction hash as supplied by the caller
    pub hash: String,
    /// Sender address
    pub from: String,
    /// Token recipient address
    pub to: String,
    /// Amount formatted with the token's decimals
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_usdt_on_both_networks() {
        let erc20 = token_descriptor(Network::Evm, "USDT").unwrap();
        assert_eq!(erc20.contract_address, USDT_ERC20.contract_address);
        assert_eq!(erc20.decimals, 6);

        let trc20 = token_descriptor(Network::Tron, "USDT").unwrap();
        assert_eq!(trc20.contract_address, "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
    }

    #[test]
    fn unknown_symbol_is_unsupported() {
        let err = token_descriptor(Network::Evm, "DAI").unwrap_err();
        assert!(matches!(err, ChainError::UnsupportedToken(ref s) if s == "DAI"));
    }

    #[test]
    fn erc20_contract_is_lowercase() {
        assert_eq!(
            USDT_ERC20.contract_address,
            USDT_ERC20.contract_address.to_lowercase()
        );
    }

    #[test]
    fn network_labels() {
        assert_eq!(Network::Evm.to_string(), "ERC20");
        assert_eq!(Network::Tron.to_string(), "TRC20");
        assert_eq!(serde_json::to_string(&Network::Tron).unwrap(), "\"TRC20\"");
    }
}
