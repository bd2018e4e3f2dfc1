// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderMap;
use tokio_util::sync::CancellationToken;

use crate::context::RequestContext;
use crate::service::QueryService;

/// Request id header, set by the request-id layer when the client omits it.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Query service wired to the production readers and cache.
pub type CryptoService = QueryService;

/// Non-empty `x-request-id` header value, if present and valid UTF-8.
pub fn header_request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CryptoService>,
    /// Deadline applied to every lookup.
    pub request_timeout: Duration,
    /// Cancelled when the server starts shutting down.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(service: CryptoService, request_timeout: Duration, shutdown: CancellationToken) -> Self {
        Self {
            service: Arc::new(service),
            request_timeout,
            shutdown,
        }
    }

    /// Context for one inbound request: its id, the shutdown token and the
    /// configured deadline.
    pub fn request_context(&self, headers: &HeaderMap) -> RequestContext {
        let request_id = header_request_id(headers)
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        RequestContext::new(request_id, self.shutdown.child_token()).with_timeout(self.request_timeout)
    }
}
