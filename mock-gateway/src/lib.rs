//! Mock authentication/discovery backend.
//!
//! # Overview
//! Reproduces the response contract of the real backend (paths, status
//! codes, error payload shapes) with fixed fixtures, so a client's network
//! integration can be checked before the real backend exists.
//!
//! # Design
//! - No state: every response is a function of the request alone.
//! - Guard order inside each endpoint decides which single error code wins.
//! - Unknown paths and wrong methods both answer `NOT_FOUND`; panics answer
//!   `INTERNAL_ERROR` through `CatchPanicLayer`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod exchange;
pub mod fixtures;
pub mod handlers;

pub use auth::AuthDecision;
pub use config::GatewayConfig;
pub use error::{ErrorCode, ErrorPayload, GatewayError};
pub use exchange::{FirebaseExchangeRequest, MIN_FIREBASE_TOKEN_LEN};
pub use fixtures::{DiscoveryPage, HealthStatus, Profile, TokenBundle, UserRecord};

pub const ADMIN_PATH: &str = "/admin/";
pub const HEALTH_PATH: &str = "/api/v1/health/";
pub const DISCOVERY_PATH: &str = "/api/v1/discovery/";
pub const FIREBASE_EXCHANGE_PATH: &str = "/api/v1/auth/firebase-exchange/";

/// Every served endpoint as `(method, path)`.
pub const ENDPOINTS: [(&str, &str); 4] = [
    ("GET", ADMIN_PATH),
    ("GET", HEALTH_PATH),
    ("GET", DISCOVERY_PATH),
    ("POST", FIREBASE_EXCHANGE_PATH),
];

pub fn app() -> Router {
    let routes = Router::new()
        .route(ADMIN_PATH, get(handlers::admin).fallback(handlers::not_found))
        .route(HEALTH_PATH, get(handlers::health).fallback(handlers::not_found))
        .route(DISCOVERY_PATH, get(handlers::discovery).fallback(handlers::not_found))
        .route(
            FIREBASE_EXCHANGE_PATH,
            post(handlers::firebase_exchange).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found);
    with_gateway_layers(routes)
}

/// Wraps a router in the gateway's middleware stack: no body size limit,
/// panic recovery, request tracing and permissive CORS.
///
/// The body limit is off so oversized payloads still reach the guards and
/// get a coded answer instead of a bare 413.
pub fn with_gateway_layers(router: Router) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(handlers::internal_fault))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
