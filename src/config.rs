// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup by [`AppConfig::from_env`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `ETHEREUM_RPC_ENDPOINT` | Ethereum JSON-RPC URL | Required |
//! | `TRON_RPC_ENDPOINT` | Tron full node gRPC endpoint | `grpc.trongrid.io:50051` |
//! | `CACHE_HOST` | Redis host; unset selects the in-memory cache | Unset |
//! | `CACHE_PORT` | Redis port | `6379` |
//! | `CACHE_PASSWORD` | Redis password | Empty |
//! | `CACHE_DB_INDEX` | Redis logical database | `0` |
//! | `WALLET_BALANCE_TTL_SECS` | Balance cache TTL in seconds, at least 1 | `60` |
//! | `REQUEST_TIMEOUT_SECS` | Per-request deadline in seconds | `15` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::storage::RedisSettings;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const ETHEREUM_RPC_ENDPOINT_ENV: &str = "ETHEREUM_RPC_ENDPOINT";
pub const TRON_RPC_ENDPOINT_ENV: &str = "TRON_RPC_ENDPOINT";
pub const CACHE_HOST_ENV: &str = "CACHE_HOST";
pub const CACHE_PORT_ENV: &str = "CACHE_PORT";
pub const CACHE_PASSWORD_ENV: &str = "CACHE_PASSWORD";
pub const CACHE_DB_INDEX_ENV: &str = "CACHE_DB_INDEX";
pub const WALLET_BALANCE_TTL_ENV: &str = "WALLET_BALANCE_TTL_SECS";
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";

/// Logging format selector. `json` emits one JSON object per event.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TRON_RPC_ENDPOINT: &str = "grpc.trongrid.io:50051";
pub const DEFAULT_CACHE_PORT: u16 = 6379;
pub const DEFAULT_WALLET_BALANCE_TTL_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Fully resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub ethereum_rpc_endpoint: String,
    pub tron_rpc_endpoint: String,
    /// `None` selects the in-memory cache.
    pub redis: Option<RedisSettings>,
    pub wallet_balance_ttl: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&var, PORT_ENV, DEFAULT_PORT)?;
        let bind_addr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: HOST_ENV,
                value: host.clone(),
            })?;

        let ethereum_rpc_endpoint =
            var(ETHEREUM_RPC_ENDPOINT_ENV).ok_or(ConfigError::Missing(ETHEREUM_RPC_ENDPOINT_ENV))?;
        let tron_rpc_endpoint =
            var(TRON_RPC_ENDPOINT_ENV).unwrap_or_else(|| DEFAULT_TRON_RPC_ENDPOINT.to_string());

        let redis = match var(CACHE_HOST_ENV) {
            Some(host) => Some(RedisSettings {
                host,
                port: parse_or(&var, CACHE_PORT_ENV, DEFAULT_CACHE_PORT)?,
                password: var(CACHE_PASSWORD_ENV),
                db_index: parse_or(&var, CACHE_DB_INDEX_ENV, 0)?,
            }),
            None => None,
        };

        let ttl_secs = parse_or(&var, WALLET_BALANCE_TTL_ENV, DEFAULT_WALLET_BALANCE_TTL_SECS)?;
        // Redis rejects `EX 0`; the memory backend would never serve a hit.
        if ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                name: WALLET_BALANCE_TTL_ENV,
                value: ttl_secs.to_string(),
            });
        }
        let timeout_secs = parse_or(&var, REQUEST_TIMEOUT_ENV, DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            bind_addr,
            ethereum_rpc_endpoint,
            tron_rpc_endpoint,
            redis,
            wallet_balance_ttl: Duration::from_secs(ttl_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
