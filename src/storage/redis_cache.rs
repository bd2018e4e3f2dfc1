// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Redis-backed balance cache.
//!
//! Keys are `wallet_balance:<address>` holding the formatted balance string,
//! written with `SET ... EX <ttl>` so entries expire on the server.

use std::time::Duration;

use redis::AsyncCommands;

use super::CacheError;

/// Connection parameters for the cache server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db_index: i64,
}

impl RedisSettings {
    /// `redis://` connection URL with the password percent-encoded.
    pub fn connection_url(&self) -> Result<url::Url, CacheError> {
        let mut url = url::Url::parse(&format!("redis://{}:{}/{}", self.host, self.port, self.db_index))
            .map_err(|e| CacheError::Config(e.to_string()))?;

        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            url.set_password(Some(password))
                .map_err(|_| CacheError::Config("cannot set password on URL".to_string()))?;
        }

        Ok(url)
    }
}

/// Redis balance store.
pub struct RedisBalanceCache {
    connection: redis::aio::ConnectionManager,
    ttl: Duration,
}

pub(crate) fn wallet_balance_key(address: &str) -> String {
    format!("wallet_balance:{address}")
}

impl RedisBalanceCache {
    /// Connect and verify the server answers `PING`.
    pub async fn connect(settings: &RedisSettings, ttl: Duration) -> Result<Self, CacheError> {
        tracing::info!(host = %settings.host, port = settings.port, "Initializing cache storage connection");

        let client = redis::Client::open(settings.connection_url()?.as_str())
            .map_err(|e| CacheError::Config(e.to_string()))?;

        let mut connection = client.get_connection_manager().await.map_err(|e| {
            tracing::error!(error = %e, "Unable to connect to cache storage");
            CacheError::Redis(e.to_string())
        })?;

        let _: String = redis::cmd("PING")
            .query_async(&mut connection)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Unable to ping cache storage");
                CacheError::Redis(e.to_string())
            })?;

        Ok(Self { connection, ttl })
    }

    /// Close the connection.
    pub fn shutdown(self) {
        tracing::info!("Shutting down cache storage");
        drop(self.connection);
    }

    pub async fn get(&self, address: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        conn.get(wallet_balance_key(address))
            .await
            .map_err(|e| CacheError::Redis(e.to_string()))
    }

    pub async fn put(&self, address: &str, balance: &str) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("SET")
            .arg(wallet_balance_key(address))
            .arg(balance)
            .arg("EX")
            .arg(self.ttl.as_secs())
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Redis(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_layout() {
        assert_eq!(
            wallet_balance_key("TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD"),
            "wallet_balance:TLSrrT5DiF5TkWPffJVQNwKE7SrctRCcpD"
        );
    }

    #[test]
    fn connection_url_without_password() {
        let settings = RedisSettings {
            host: "localhost".into(),
            port: 6379,
            password: None,
            db_index: 2,
        };
        assert_eq!(settings.connection_url().unwrap().as_str(), "redis://localhost:6379/2");
    }

    #[test]
    fn connection_url_encodes_password() {
        let settings = RedisSettings {
            host: "cache.internal".into(),
            port: 6380,
            password: Some("p@ss/word".into()),
            db_index: 0,
        };
        let url = settings.connection_url().unwrap();
        assert_eq!(url.password(), Some("p%40ss%2Fword"));
        assert_eq!(url.host_str(), Some("cache.internal"));
        assert_eq!(url.port(), Some(6380));
    }

    #[test]
    fn empty_password_is_omitted() {
        let settings = RedisSettings {
            host: "localhost".into(),
            port: 6379,
            password: Some(String::new()),
            db_index: 0,
        };
        assert_eq!(settings.connection_url().unwrap().password(), None);
    }
}
