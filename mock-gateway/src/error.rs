//! Error codes and the JSON error envelope returned by the gateway.
//!
//! # Design
//! Every rejection the gateway can produce is a `GatewayError` variant. Each
//! variant maps to exactly one `ErrorCode` and one HTTP status, so the set of
//! codes a client can observe is closed and matches the contract table.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Machine-readable error code carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingToken,
    InvalidTokenFormat,
    InvalidToken,
    InvalidContentType,
    MissingFirebaseToken,
    InvalidFirebaseToken,
    NotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidContentType => "INVALID_CONTENT_TYPE",
            Self::MissingFirebaseToken => "MISSING_FIREBASE_TOKEN",
            Self::InvalidFirebaseToken => "INVALID_FIREBASE_TOKEN",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Rejections produced by the gateway's endpoint guards.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("authentication token required")]
    MissingToken,
    #[error("invalid token format")]
    InvalidTokenFormat,
    #[error("invalid token")]
    InvalidToken,
    #[error("Content-Type must be application/json")]
    InvalidContentType,
    #[error("firebase_token is required")]
    MissingFirebaseToken { reason: &'static str },
    #[error("invalid Firebase token")]
    InvalidFirebaseToken { reason: &'static str },
    #[error("endpoint not found")]
    NotFound { path: String },
    #[error("internal server error")]
    Internal(String),
}

impl GatewayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingToken => ErrorCode::MissingToken,
            Self::InvalidTokenFormat => ErrorCode::InvalidTokenFormat,
            Self::InvalidToken => ErrorCode::InvalidToken,
            Self::InvalidContentType => ErrorCode::InvalidContentType,
            Self::MissingFirebaseToken { .. } => ErrorCode::MissingFirebaseToken,
            Self::InvalidFirebaseToken { .. } => ErrorCode::InvalidFirebaseToken,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidTokenFormat | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::InvalidContentType
            | Self::MissingFirebaseToken { .. }
            | Self::InvalidFirebaseToken { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Self::MissingToken => Some("no token supplied in the Authorization header".to_string()),
            Self::InvalidTokenFormat => Some("the token must start with \"Bearer \"".to_string()),
            Self::InvalidToken => Some("token not recognized".to_string()),
            Self::InvalidContentType => None,
            Self::MissingFirebaseToken { reason } | Self::InvalidFirebaseToken { reason } => {
                Some((*reason).to_string())
            }
            Self::NotFound { path } => Some(format!("no endpoint configured for: {path}")),
            Self::Internal(fault) => Some(fault.clone()),
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
            detail: self.detail(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are the contract working as intended; only faults are errors.
        if let Self::Internal(ref fault) = self {
            tracing::error!(error = %fault, code = self.code().as_str(), "internal error");
        } else {
            tracing::debug!(code = self.code().as_str(), status = status.as_u16(), "request rejected");
        }
        (status, Json(self.payload())).into_response()
    }
}
