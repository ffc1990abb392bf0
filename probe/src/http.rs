//! Request and outcome types passed between the probe and its transport.
//!
//! # Design
//! Requests are plain data built by `EndpointProbe`. A `Transport` executes
//! them and reports back a `ProbeOutcome`: either a status code or the reason
//! no response was obtained. Unreachability is data, not an error, so the
//! classifier can treat it like any other outcome.

use std::fmt;

use serde::Serialize;

/// HTTP method for a probe request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Why a request produced no HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "description", rename_all = "snake_case")]
pub enum TransportFault {
    ConnectionRefused,
    Timeout,
    Other(String),
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFault::ConnectionRefused => write!(f, "connection refused"),
            TransportFault::Timeout => write!(f, "timed out"),
            TransportFault::Other(description) => write!(f, "{description}"),
        }
    }
}

/// What a single probe call observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    Unreachable(TransportFault),
    Status(u16),
}

/// Executes probe requests. Implemented by `UreqTransport` for real traffic
/// and by plain closures in tests.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> ProbeOutcome;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> ProbeOutcome,
{
    fn execute(&self, request: &HttpRequest) -> ProbeOutcome {
        self(request)
    }
}
