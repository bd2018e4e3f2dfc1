// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fixed-decimal rendering of raw token amounts.

use alloy::primitives::U256;

/// Format a raw token amount (minor units) with exactly `decimals`
/// fractional digits.
///
/// Uses integer division only, so amounts beyond 2^53 keep every digit.
///
/// ```rust,ignore
/// assert_eq!(format_amount(U256::from(1_234_560u64), 6), "1.234560");
/// ```
pub fn format_amount(raw: U256, decimals: u8) -> String {
    if decimals == 0 {
        return raw.to_string();
    }

    let width = decimals as usize;

    // 10^78 no longer fits in 256 bits; every representable value is then
    // below one whole unit.
    let (whole, remainder) = match U256::from(10u64).checked_pow(U256::from(decimals)) {
        Some(divisor) => (raw / divisor, raw % divisor),
        None => (U256::ZERO, raw),
    };

    let fraction = remainder.to_string();
    format!("{whole}.{fraction:0>width$}")
}
