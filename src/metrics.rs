// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Prometheus counters for lookups and cache health.

use std::sync::OnceLock;

use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, IntCounterVec, Opts, TextEncoder};

static BALANCE_LOOKUPS: OnceLock<IntCounterVec> = OnceLock::new();
static TRANSACTION_LOOKUPS: OnceLock<IntCounterVec> = OnceLock::new();
static CACHE_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

fn balance_lookups() -> &'static IntCounterVec {
    BALANCE_LOOKUPS.get_or_init(|| {
        IntCounterVec::new(
            Opts::new("balance_lookups_total", "Wallet balance lookups by source"),
            &["network", "source"],
        )
        .expect("valid metric definition")
    })
}

fn transaction_lookups() -> &'static IntCounterVec {
    TRANSACTION_LOOKUPS.get_or_init(|| {
        IntCounterVec::new(
            Opts::new("transaction_lookups_total", "Transaction lookups by outcome"),
            &["network", "outcome"],
        )
        .expect("valid metric definition")
    })
}

fn cache_errors() -> &'static IntCounterVec {
    CACHE_ERRORS.get_or_init(|| {
        IntCounterVec::new(
            Opts::new("cache_errors_total", "Balance cache failures by operation"),
            &["op"],
        )
        .expect("valid metric definition")
    })
}

/// Balance served from the cache. The network is not classified on a hit.
pub fn inc_balance_cache_hit() {
    balance_lookups().with_label_values(&["unknown", "cache"]).inc();
}

pub fn inc_balance_chain_read(network: &str) {
    balance_lookups().with_label_values(&[network, "chain"]).inc();
}

pub fn inc_transaction_lookup(network: &str, outcome: &str) {
    transaction_lookups()
        .with_label_values(&[network, outcome])
        .inc();
}

pub fn inc_cache_error(op: &str) {
    cache_errors().with_label_values(&[op]).inc();
}

/// Render all counters in the Prometheus text exposition format.
pub fn render() -> String {
    let mut mfs = Vec::new();
    mfs.extend(balance_lookups().collect());
    mfs.extend(transaction_lookups().collect());
    mfs.extend(cache_errors().collect());

    encode(mfs)
}

/// Encode families, skipping label vectors that have no series yet. The text
/// encoder rejects an empty family outright.
fn encode(mut mfs: Vec<MetricFamily>) -> String {
    mfs.retain(|mf| !mf.get_metric().is_empty());

    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&mfs, &mut buf) {
        tracing::error!(error = %e, "Failed to encode metrics");
    }
    String::from_utf8_lossy(&buf).into_owned()
}
