//! Axum handlers. Each one is a thin adapter over the pure decision
//! functions in `auth` and `exchange`.

use std::any::Any;

use axum::body::Bytes;
use axum::http::{HeaderMap, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::auth::AuthDecision;
use crate::error::GatewayError;
use crate::exchange::{exchange, FirebaseExchangeRequest};
use crate::fixtures::{self, DiscoveryPage, HealthStatus, TokenBundle};

pub async fn admin() -> Html<&'static str> {
    Html(fixtures::ADMIN_PAGE)
}

pub async fn health() -> Json<HealthStatus> {
    let now = chrono::Utc::now();
    let timestamp = now.timestamp_micros() as f64 / 1_000_000.0;
    Json(fixtures::health_status(timestamp))
}

pub async fn discovery(headers: HeaderMap) -> Result<Json<DiscoveryPage>, GatewayError> {
    let decision = AuthDecision::from_headers(&headers);
    tracing::debug!(?decision, "discovery auth decision");
    decision.into_result()?;
    Ok(Json(fixtures::discovery_page()))
}

pub async fn firebase_exchange(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TokenBundle>, GatewayError> {
    let request = FirebaseExchangeRequest::from_body(&headers, &body)?;
    let bundle = exchange(&request)?;
    tracing::info!(user_id = bundle.user.id, "firebase token exchanged");
    Ok(Json(bundle))
}

/// Fallback for unmatched paths and for known paths hit with the wrong method.
pub async fn not_found(uri: Uri) -> GatewayError {
    GatewayError::NotFound {
        path: uri.path().to_string(),
    }
}

/// Converts a handler panic into an `INTERNAL_ERROR` response.
pub fn internal_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };
    GatewayError::Internal(detail).into_response()
}
