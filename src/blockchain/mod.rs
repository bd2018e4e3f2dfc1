// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain integration for USDT on Ethereum (ERC-20) and Tron (TRC-20).
//!
//! This module provides functionality for:
//! - Detecting the network an address or transaction hash belongs to
//! - Querying token balances through each chain's RPC interface
//! - Decoding token transfers out of fetched transactions
//! - Rendering raw token amounts as decimal strings

pub mod amount;
pub mod error;
pub mod evm;
pub mod network;
pub mod reader;
pub mod tron;
pub mod types;

pub use amount::format_amount;
pub use error::{ChainError, DecodeError, IdentifierKind};
pub use evm::EvmReader;
pub use network::{classify_address, classify_hash};
pub use reader::ChainReader;
pub use tron::TronReader;
pub use types::*;
