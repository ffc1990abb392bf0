//! Firebase-token exchange simulation.
//!
//! # Design
//! Validation is an ordered chain: content type, body shape, token presence,
//! token shape. The first failing step decides the error code. The length
//! rule is a fixture heuristic and says nothing about real Firebase tokens.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::error::GatewayError;
use crate::fixtures::{token_bundle, TokenBundle};

/// Tokens shorter than this (in characters) are rejected.
pub const MIN_FIREBASE_TOKEN_LEN: usize = 50;

/// Parsed exchange request body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FirebaseExchangeRequest {
    pub firebase_token: Option<String>,
}

impl FirebaseExchangeRequest {
    /// Decodes the body after checking the content type.
    ///
    /// An absent, null or empty `firebase_token` decodes to `None`; a value of
    /// any other non-string type is rejected here.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, GatewayError> {
        if !is_json_content_type(headers) {
            return Err(GatewayError::InvalidContentType);
        }
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Err(GatewayError::MissingFirebaseToken {
                reason: "request body must be a JSON object",
            });
        };
        let firebase_token = match fields.remove("firebase_token") {
            None | Some(Value::Null) => None,
            Some(Value::String(token)) if token.is_empty() => None,
            Some(Value::String(token)) => Some(token),
            Some(_) => {
                return Err(GatewayError::InvalidFirebaseToken {
                    reason: "firebase_token must be a string",
                })
            }
        };
        Ok(Self { firebase_token })
    }
}

/// Runs the token checks and returns the fixture bundle on success.
pub fn exchange(request: &FirebaseExchangeRequest) -> Result<TokenBundle, GatewayError> {
    let Some(token) = request.firebase_token.as_deref() else {
        return Err(GatewayError::MissingFirebaseToken {
            reason: "a Firebase token must be supplied",
        });
    };
    if token.chars().count() < MIN_FIREBASE_TOKEN_LEN {
        return Err(GatewayError::InvalidFirebaseToken {
            reason: "token too short",
        });
    }
    Ok(token_bundle())
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
