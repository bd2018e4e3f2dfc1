// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tron address encoding.
//!
//! A Tron address is a 21-byte value (`0x41` version byte followed by the
//! 20-byte account id) rendered as base58 with a 4-byte double-SHA256
//! checksum.

use crate::blockchain::ChainError;

/// Version byte of mainnet addresses.
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Length of a raw address including the version byte.
pub const ADDRESS_LEN: usize = 21;

/// Decode a base58check address into its 21 raw bytes.
pub fn decode_base58(address: &str) -> Result<[u8; ADDRESS_LEN], ChainError> {
    let bytes = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| ChainError::InvalidAddress(format!("{address}: {e}")))?;

    let raw: [u8; ADDRESS_LEN] = bytes.as_slice().try_into().map_err(|_| {
        ChainError::InvalidAddress(format!("{address}: expected {ADDRESS_LEN} bytes"))
    })?;

    if raw[0] != ADDRESS_PREFIX {
        return Err(ChainError::InvalidAddress(format!(
            "{address}: unexpected version byte {:#04x}",
            raw[0]
        )));
    }

    Ok(raw)
}

/// Encode raw address bytes (version byte included) as base58check.
pub fn encode_base58(raw: &[u8]) -> String {
    bs58::encode(raw).with_check().into_string()
}

/// Right-align the 20-byte account id of `raw` in a 32-byte ABI word.
pub fn to_abi_word(raw: &[u8; ADDRESS_LEN]) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(&raw[1..]);
    word
}

/// Recover an address from the low 20 bytes of a 32-byte ABI word.
pub fn from_abi_word(word: &[u8]) -> String {
    let mut raw = [0u8; ADDRESS_LEN];
    raw[0] = ADDRESS_PREFIX;
    raw[1..].copy_from_slice(&word[12..32]);
    encode_base58(&raw)
}
