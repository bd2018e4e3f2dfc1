// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::Network,
    models::{TransactionResponse, WalletBalanceResponse},
    state::{header_request_id, AppState},
};

pub mod health;
pub mod metrics;
pub mod transaction;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/wallet/{address}", get(wallet::get_wallet_balance))
        .route("/transaction/{hash}", get(transaction::get_transaction));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/metrics", get(metrics::metrics))
        .nest("/api", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Layers run outermost-last: the id is set before tracing sees the
        // request and copied onto the response on the way out.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// Span for one HTTP request, tagged with the id set by `SetRequestIdLayer`.
fn request_span(request: &Request<Body>) -> Span {
    let request_id = header_request_id(request.headers()).unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        wallet::get_wallet_balance,
        transaction::get_transaction,
        health::health,
        health::liveness,
        metrics::metrics
    ),
    components(
        schemas(
            WalletBalanceResponse,
            TransactionResponse,
            Network,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Wallet", description = "USDT wallet balances"),
        (name = "Transaction", description = "USDT transfer lookups"),
        (name = "Health", description = "Probes and metrics")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::lazy_state;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(lazy_state());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn unrecognized_address_is_bad_request() {
        let response = get(router(lazy_state()), "/api/wallet/abc").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "unable to detect the network by address"
        );
    }

    #[tokio::test]
    async fn unrecognized_hash_is_bad_request() {
        let response = get(router(lazy_state()), "/api/transaction/0x1234").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "unable to detect the network by hash"
        );
    }

    #[tokio::test]
    async fn unreachable_node_is_a_gateway_error() {
        let response = get(
            router(lazy_state()),
            "/api/wallet/0xe983fD1798689eee00c0Fb77e79B8f372DF41060",
        )
        .await;

        assert!(
            matches!(
                response.status(),
                StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT
            ),
            "unexpected status {}",
            response.status()
        );
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() {
        let app = router(lazy_state());

        let response = get(app.clone(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
        let generated = response.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());

        let response = app
            .oneshot(
                Request::get("/health/live")
                    .header("x-request-id", "client-supplied")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "client-supplied");
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_text() {
        crate::metrics::inc_cache_error("get");

        let response = get(router(lazy_state()), "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("cache_errors_total"));
    }

    #[test]
    fn openapi_documents_lookup_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/wallet/{address}"));
        assert!(doc.paths.paths.contains_key("/api/transaction/{hash}"));
    }

    #[test]
    fn request_span_carries_the_request_id() {
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing::span::{Attributes, Id};
        use tracing::Subscriber;
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        #[derive(Clone, Default)]
        struct Recorded(Arc<Mutex<Vec<(String, String)>>>);

        impl Visit for Recorded {
            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                self.0
                    .lock()
                    .unwrap()
                    .push((field.name().to_string(), format!("{value:?}")));
            }
        }

        impl<S: Subscriber> Layer<S> for Recorded {
            fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
                attrs.record(&mut self.clone());
            }
        }

        let recorded = Recorded::default();
        let subscriber = tracing_subscriber::registry().with(recorded.clone());

        let request = Request::get("/health/live")
            .header("x-request-id", "req-span-1")
            .body(Body::empty())
            .unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let _span = request_span(&request);
        });

        let fields = recorded.0.lock().unwrap();
        assert!(fields
            .iter()
            .any(|(name, value)| name == "request_id" && value == "req-span-1"));
    }
}
