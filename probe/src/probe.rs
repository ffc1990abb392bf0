//! Canned diagnostic requests against the backend contract.
//!
//! # Design
//! `EndpointProbe` holds only a `base_url`. Each probe is split into a
//! `build_*` method that produces an `HttpRequest`, a `Transport` call, and
//! a pure classifier. The caller picks the transport, so the request and
//! verdict logic stay deterministic.

use serde::Serialize;
use serde_json::json;

use crate::error::ProbeError;
use crate::http::{HttpMethod, HttpRequest, ProbeOutcome, Transport};
use crate::report::Report;
use crate::verdict::{classify_discovery, classify_firebase_exchange, Verdict};

pub const FIREBASE_EXCHANGE_PATH: &str = "/api/v1/auth/firebase-exchange/";
pub const DISCOVERY_PATH: &str = "/api/v1/discovery/";

/// Placeholder sent to the exchange endpoint. Deliberately under the
/// backend's minimum length so a healthy backend rejects it.
pub const PLACEHOLDER_FIREBASE_TOKEN: &str = "test_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    FirebaseExchange,
    Discovery,
}

impl ProbeKind {
    pub fn label(self) -> &'static str {
        match self {
            ProbeKind::FirebaseExchange => "firebase exchange",
            ProbeKind::Discovery => "discovery",
        }
    }
}

/// Result of one probe call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub probe: ProbeKind,
    pub method: HttpMethod,
    pub url: String,
    pub outcome: ProbeOutcome,
    pub verdict: Verdict,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Finding {
    fn new(probe: ProbeKind, request: &HttpRequest, outcome: ProbeOutcome) -> Self {
        let verdict = match probe {
            ProbeKind::FirebaseExchange => classify_firebase_exchange(&outcome),
            ProbeKind::Discovery => classify_discovery(&outcome),
        };
        let (message, recommendation) = describe(probe, &outcome, verdict);
        Self {
            probe,
            method: request.method,
            url: request.url.clone(),
            outcome,
            verdict,
            message,
            recommendation: recommendation.map(str::to_string),
        }
    }
}

fn describe(
    probe: ProbeKind,
    outcome: &ProbeOutcome,
    verdict: Verdict,
) -> (String, Option<&'static str>) {
    let name = probe.label();
    match (verdict, outcome) {
        (Verdict::Unreachable, ProbeOutcome::Unreachable(fault)) => (
            format!("cannot connect to the backend ({fault})"),
            Some("check that the backend server is started"),
        ),
        (Verdict::Misconfigured404, _) => (
            format!("{name} endpoint returned 404, the URL is misconfigured"),
            Some("check the URL routing configuration"),
        ),
        (Verdict::ServerError500, _) => (
            format!("{name} endpoint exists but returned a server error"),
            Some("check the Firebase Admin SDK configuration"),
        ),
        (Verdict::OkEndpointExists, ProbeOutcome::Status(400 | 401))
            if probe == ProbeKind::FirebaseExchange =>
        {
            (
                format!("{name} endpoint exists (rejection expected for the placeholder token)"),
                None,
            )
        }
        (Verdict::OkEndpointExists, ProbeOutcome::Status(401)) => (
            format!("{name} endpoint exists (auth rejection expected without a token)"),
            None,
        ),
        (_, ProbeOutcome::Status(status)) => (
            format!("{name} endpoint responded (status {status})"),
            None,
        ),
        (_, ProbeOutcome::Unreachable(fault)) => (format!("{name} probe failed: {fault}"), None),
    }
}

/// Stateless client issuing the two diagnostic probes.
#[derive(Debug, Clone)]
pub struct EndpointProbe {
    base_url: String,
}

impl EndpointProbe {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_firebase_exchange(&self) -> Result<HttpRequest, ProbeError> {
        let body = serde_json::to_string(&json!({ "firebase_token": PLACEHOLDER_FIREBASE_TOKEN }))
            .map_err(ProbeError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{FIREBASE_EXCHANGE_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_discovery(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{DISCOVERY_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn probe_firebase_exchange(&self, transport: &impl Transport) -> Result<Finding, ProbeError> {
        let request = self.build_firebase_exchange()?;
        let outcome = transport.execute(&request);
        Ok(Finding::new(ProbeKind::FirebaseExchange, &request, outcome))
    }

    pub fn probe_discovery(&self, transport: &impl Transport) -> Finding {
        let request = self.build_discovery();
        let outcome = transport.execute(&request);
        Finding::new(ProbeKind::Discovery, &request, outcome)
    }

    /// Runs both probes in order and aggregates them into a report.
    pub fn run(&self, transport: &impl Transport) -> Result<Report, ProbeError> {
        let exchange = self.probe_firebase_exchange(transport)?;
        let discovery = self.probe_discovery(transport);
        tracing::info!(
            exchange = exchange.verdict.as_str(),
            discovery = discovery.verdict.as_str(),
            "probes finished"
        );
        Ok(Report::new(&self.base_url, exchange, discovery))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TransportFault;

    fn probe() -> EndpointProbe {
        EndpointProbe::new("http://localhost:8000")
    }

    fn answering(status: u16) -> impl Fn(&HttpRequest) -> ProbeOutcome {
        move |_| ProbeOutcome::Status(status)
    }

    #[test]
    fn build_firebase_exchange_posts_placeholder_token() {
        let req = probe().build_firebase_exchange().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8000/api/v1/auth/firebase-exchange/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "firebase_token": "test_token" }));
    }

    #[test]
    fn placeholder_token_is_ten_characters() {
        assert_eq!(PLACEHOLDER_FIREBASE_TOKEN.chars().count(), 10);
    }

    #[test]
    fn build_discovery_sends_no_credentials() {
        let req = probe().build_discovery();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8000/api/v1/discovery/");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let probe = EndpointProbe::new("http://localhost:8000/");
        assert_eq!(probe.base_url(), "http://localhost:8000");
        assert_eq!(probe.build_discovery().url, "http://localhost:8000/api/v1/discovery/");
    }

    #[test]
    fn exchange_404_recommends_checking_routing() {
        let finding = probe().probe_firebase_exchange(&answering(404)).unwrap();
        assert_eq!(finding.verdict, Verdict::Misconfigured404);
        assert_eq!(
            finding.recommendation.as_deref(),
            Some("check the URL routing configuration")
        );
    }

    #[test]
    fn exchange_400_is_expected_rejection() {
        let finding = probe().probe_firebase_exchange(&answering(400)).unwrap();
        assert_eq!(finding.verdict, Verdict::OkEndpointExists);
        assert!(finding.message.contains("placeholder token"));
        assert!(finding.recommendation.is_none());
    }

    #[test]
    fn discovery_401_is_expected_rejection_but_400_is_generic() {
        let finding = probe().probe_discovery(&answering(401));
        assert!(finding.message.contains("auth rejection expected"));

        let finding = probe().probe_discovery(&answering(400));
        assert_eq!(finding.verdict, Verdict::OkEndpointExists);
        assert_eq!(finding.message, "discovery endpoint responded (status 400)");
    }

    #[test]
    fn discovery_unreachable_includes_fault_description() {
        let transport =
            |_: &HttpRequest| ProbeOutcome::Unreachable(TransportFault::Other("dns lookup failed".to_string()));
        let finding = probe().probe_discovery(&transport);
        assert_eq!(finding.verdict, Verdict::Unreachable);
        assert!(finding.message.contains("dns lookup failed"));
        assert_eq!(
            finding.recommendation.as_deref(),
            Some("check that the backend server is started")
        );
    }

    #[test]
    fn run_sends_exchange_then_discovery() {
        let seen = std::cell::RefCell::new(Vec::new());
        let transport = |req: &HttpRequest| {
            seen.borrow_mut().push((req.method, req.url.clone()));
            ProbeOutcome::Status(401)
        };
        let report = probe().run(&transport).unwrap();
        assert_eq!(report.exchange.verdict, Verdict::OkEndpointExists);
        assert_eq!(report.discovery.verdict, Verdict::OkEndpointExists);

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, HttpMethod::Post);
        assert!(seen[0].1.ends_with(FIREBASE_EXCHANGE_PATH));
        assert_eq!(seen[1].0, HttpMethod::Get);
        assert!(seen[1].1.ends_with(DISCOVERY_PATH));
    }
}
