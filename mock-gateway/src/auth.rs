//! Bearer-token gate for the discovery endpoint.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::GatewayError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// The only access token the gateway accepts. Also the token handed out by a
/// successful firebase exchange.
pub const VALID_ACCESS_TOKEN: &str = "valid-test-token";

/// Classification of an `Authorization` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Missing,
    Malformed,
    Invalid,
    Valid,
}

impl AuthDecision {
    /// Checks run in order: presence, prefix, token value. The first failing
    /// check decides.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Self::Missing;
        };
        if value.is_empty() {
            return Self::Missing;
        }
        // Compared as bytes: a token with obs-text is still a Bearer token.
        match value.as_bytes().strip_prefix(BEARER_PREFIX.as_bytes()) {
            None => Self::Malformed,
            Some(token) if token == VALID_ACCESS_TOKEN.as_bytes() => Self::Valid,
            Some(_) => Self::Invalid,
        }
    }

    pub fn into_result(self) -> Result<(), GatewayError> {
        match self {
            Self::Missing => Err(GatewayError::MissingToken),
            Self::Malformed => Err(GatewayError::InvalidTokenFormat),
            Self::Invalid => Err(GatewayError::InvalidToken),
            Self::Valid => Ok(()),
        }
    }
}
