//! Hardcoded response bodies.
//!
//! Success payloads never vary with the request: inputs only decide whether
//! a request passes, never what it gets back.

use serde::{Deserialize, Serialize};

use crate::auth::VALID_ACCESS_TOKEN;

pub const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Backend Administration</title></head>
<body>
    <h1>Backend Administration</h1>
    <p>Test backend is up and running.</p>
</body>
</html>
"#;

pub const SERVICE_VERSION: &str = "1.0.0-test";
pub const REFRESH_TOKEN: &str = "valid-refresh-token";
pub const TOKEN_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub timestamp: f64,
    pub version: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryPage {
    pub profiles: Vec<Profile>,
    pub has_more: bool,
    pub next_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub display_name: String,
    pub profile_complete: bool,
}

/// Body of a successful firebase exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserRecord,
    pub message: String,
}

pub fn health_status(timestamp: f64) -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        timestamp,
        version: SERVICE_VERSION.to_string(),
        message: "test backend operational".to_string(),
    }
}

pub fn discovery_page() -> DiscoveryPage {
    DiscoveryPage {
        profiles: vec![
            Profile {
                id: 1,
                name: "Alice".to_string(),
                age: 28,
                bio: "Loves nature and travelling".to_string(),
                photos: vec!["photo1.jpg".to_string()],
            },
            Profile {
                id: 2,
                name: "Bob".to_string(),
                age: 32,
                bio: "Passionate about cooking".to_string(),
                photos: vec!["photo2.jpg".to_string()],
            },
        ],
        has_more: true,
        next_page: Some(2),
    }
}

pub fn token_bundle() -> TokenBundle {
    TokenBundle {
        access_token: VALID_ACCESS_TOKEN.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
        token_type: "Bearer".to_string(),
        expires_in: TOKEN_TTL_SECS,
        user: UserRecord {
            id: 1,
            email: "test@example.com".to_string(),
            display_name: "Test User".to_string(),
            profile_complete: true,
        },
        message: "token exchange succeeded".to_string(),
    }
}
