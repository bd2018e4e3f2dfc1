// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::blockchain::{ChainError, DecodeError};
use crate::service::QueryError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, message)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Chain(e) => e.into(),
        }
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        let message = err.to_string();
        match err {
            ChainError::Unrecognized(_)
            | ChainError::UnsupportedToken(_)
            | ChainError::InvalidAddress(_)
            | ChainError::InvalidHash(_) => Self::bad_request(message),
            ChainError::Decode(DecodeError::TransactionNotFound) => Self::not_found(message),
            ChainError::Decode(ref d) if d.is_benign() => Self::unprocessable(message),
            ChainError::Decode(_) | ChainError::Rpc(_) | ChainError::InvalidEndpoint(_) => {
                Self::bad_gateway(message)
            }
            ChainError::DeadlineExceeded => Self::gateway_timeout(message),
            ChainError::Cancelled => Self::service_unavailable(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::IdentifierKind;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let nf = ApiError::not_found("missing");
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.message, "missing");

        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");

        let unp = ApiError::unprocessable("oops");
        assert_eq!(unp.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unp.message, "oops");
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }

    #[test]
    fn chain_errors_map_to_statuses() {
        let cases = [
            (
                ChainError::Unrecognized(IdentifierKind::Address),
                StatusCode::BAD_REQUEST,
            ),
            (ChainError::InvalidHash("zz".into()), StatusCode::BAD_REQUEST),
            (
                DecodeError::TransactionNotFound.into(),
                StatusCode::NOT_FOUND,
            ),
            (
                DecodeError::NotThisToken.into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DecodeError::NotTransferMethod.into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DecodeError::UnknownInputData.into(), StatusCode::BAD_GATEWAY),
            (ChainError::Rpc("connection reset".into()), StatusCode::BAD_GATEWAY),
            (ChainError::DeadlineExceeded, StatusCode::GATEWAY_TIMEOUT),
            (ChainError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (err, status) in cases {
            let api: ApiError = QueryError::from(err).into();
            assert_eq!(api.status, status, "{}", api.message);
        }
    }

    #[test]
    fn message_carries_the_error_text() {
        let api: ApiError = ChainError::Decode(DecodeError::NotTransferMethod).into();
        assert_eq!(api.message, DecodeError::NotTransferMethod.to_string());
    }
}
