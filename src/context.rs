// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-request context threaded through every engine call.
//!
//! Carries the request id used in log lines, plus the cancellation token and
//! deadline every remote call must honor.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::blockchain::ChainError;

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            request_id: request_id.into(),
            cancel,
            deadline: None,
        }
    }

    /// Context with a fresh request id and no cancellation source.
    pub fn detached() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), CancellationToken::new())
    }

    /// Bound every remote call made under this context to `timeout` from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run a remote call, aborting it when the context is cancelled or its
    /// deadline passes. The call future is dropped on abort.
    pub async fn run<T, E, F>(&self, call: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<ChainError>,
    {
        if self.cancel.is_cancelled() {
            return Err(ChainError::Cancelled.into());
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => Err(ChainError::Cancelled.into()),
                    _ = tokio::time::sleep_until(deadline) => Err(ChainError::DeadlineExceeded.into()),
                    result = call => result,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => Err(ChainError::Cancelled.into()),
                    result = call => result,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_completed_calls() {
        let ctx = RequestContext::detached().with_timeout(Duration::from_secs(5));
        let out: Result<u32, ChainError> = ctx.run(async { Ok(7) }).await;
        assert_eq!(out.unwrap(), 7);
    }

    #[tokio::test]
    async fn deadline_aborts_slow_calls() {
        let ctx = RequestContext::detached().with_timeout(Duration::from_millis(10));
        let out: Result<(), ChainError> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            })
            .await;
        assert!(matches!(out, Err(ChainError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn cancellation_aborts_pending_calls() {
        let token = CancellationToken::new();
        let ctx = RequestContext::new("req-1", token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });

        let out: Result<(), ChainError> = ctx
            .run(std::future::pending::<Result<(), ChainError>>())
            .await;
        assert!(matches!(out, Err(ChainError::Cancelled)));
        canceller.await.unwrap();
    }

    #[tokio::test]
    async fn already_cancelled_context_never_polls_the_call() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = RequestContext::new("req-2", token);

        let out: Result<(), ChainError> = ctx
            .run(async { Err(ChainError::Rpc("call was polled".into())) })
            .await;
        assert!(matches!(out, Err(ChainError::Cancelled)));
    }
}
