// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Crypto Service - USDT Balance and Transfer Lookups
//!
//! This crate answers two questions about USDT on Ethereum (ERC-20) and
//! Tron (TRC-20): what a wallet holds, and what a transaction transferred.
//! The network is detected from the shape of the address or hash.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Network detection, chain readers and amount formatting
//! - `context` - Per-request id, cancellation and deadline
//! - `service` - Cache-aside balance and live transaction lookups
//! - `storage` - Balance cache (Redis or in-memory)

pub mod api;
pub mod blockchain;
pub mod config;
pub mod context;
pub mod error;
pub mod metrics;
pub mod models;
pub mod service;
pub mod state;
pub mod storage;
