//! Status-code classification.
//!
//! Both classifiers are pure and total over `ProbeOutcome`; they never look
//! at response bodies.

use serde::Serialize;

use crate::http::ProbeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "OK_ENDPOINT_EXISTS")]
    OkEndpointExists,
    #[serde(rename = "MISCONFIGURED_404")]
    Misconfigured404,
    #[serde(rename = "SERVER_ERROR_500")]
    ServerError500,
    #[serde(rename = "UNREACHABLE")]
    Unreachable,
    #[serde(rename = "UNKNOWN_STATUS")]
    UnknownStatus,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::OkEndpointExists => "OK_ENDPOINT_EXISTS",
            Verdict::Misconfigured404 => "MISCONFIGURED_404",
            Verdict::ServerError500 => "SERVER_ERROR_500",
            Verdict::Unreachable => "UNREACHABLE",
            Verdict::UnknownStatus => "UNKNOWN_STATUS",
        }
    }

    /// A server error still proves the route exists, so it counts as healthy.
    pub fn is_healthy(self) -> bool {
        matches!(self, Verdict::OkEndpointExists | Verdict::ServerError500)
    }
}

fn is_http_status(status: u16) -> bool {
    (100..=599).contains(&status)
}

/// The exchange probe sends a deliberately short token, so 400/401 is the
/// expected answer from a correctly wired backend.
pub fn classify_firebase_exchange(outcome: &ProbeOutcome) -> Verdict {
    match *outcome {
        ProbeOutcome::Unreachable(_) => Verdict::Unreachable,
        ProbeOutcome::Status(status) if !is_http_status(status) => Verdict::UnknownStatus,
        ProbeOutcome::Status(404) => Verdict::Misconfigured404,
        ProbeOutcome::Status(400 | 401) => Verdict::OkEndpointExists,
        ProbeOutcome::Status(500) => Verdict::ServerError500,
        ProbeOutcome::Status(_) => Verdict::OkEndpointExists,
    }
}

/// The discovery probe sends no credentials, so 401 is expected.
pub fn classify_discovery(outcome: &ProbeOutcome) -> Verdict {
    match *outcome {
        ProbeOutcome::Unreachable(_) => Verdict::Unreachable,
        ProbeOutcome::Status(status) if !is_http_status(status) => Verdict::UnknownStatus,
        ProbeOutcome::Status(404) => Verdict::Misconfigured404,
        ProbeOutcome::Status(_) => Verdict::OkEndpointExists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TransportFault;

    #[test]
    fn exchange_rejections_prove_the_endpoint_exists() {
        assert_eq!(classify_firebase_exchange(&ProbeOutcome::Status(400)), Verdict::OkEndpointExists);
        assert_eq!(classify_firebase_exchange(&ProbeOutcome::Status(401)), Verdict::OkEndpointExists);
    }

    #[test]
    fn exchange_404_is_misconfigured() {
        assert_eq!(classify_firebase_exchange(&ProbeOutcome::Status(404)), Verdict::Misconfigured404);
    }

    #[test]
    fn exchange_500_is_a_healthy_warning() {
        let verdict = classify_firebase_exchange(&ProbeOutcome::Status(500));
        assert_eq!(verdict, Verdict::ServerError500);
        assert!(verdict.is_healthy());
    }

    #[test]
    fn exchange_other_statuses_are_permissive() {
        for status in [200, 302, 403, 405, 502] {
            assert_eq!(
                classify_firebase_exchange(&ProbeOutcome::Status(status)),
                Verdict::OkEndpointExists,
                "status {status}"
            );
        }
    }

    #[test]
    fn discovery_500_is_not_singled_out() {
        assert_eq!(classify_discovery(&ProbeOutcome::Status(500)), Verdict::OkEndpointExists);
        assert_eq!(classify_discovery(&ProbeOutcome::Status(401)), Verdict::OkEndpointExists);
        assert_eq!(classify_discovery(&ProbeOutcome::Status(404)), Verdict::Misconfigured404);
    }

    #[test]
    fn no_response_is_unreachable_for_both() {
        for fault in [
            TransportFault::ConnectionRefused,
            TransportFault::Timeout,
            TransportFault::Other("dns failure".to_string()),
        ] {
            let outcome = ProbeOutcome::Unreachable(fault);
            assert_eq!(classify_firebase_exchange(&outcome), Verdict::Unreachable);
            assert_eq!(classify_discovery(&outcome), Verdict::Unreachable);
        }
        assert!(!Verdict::Unreachable.is_healthy());
    }

    #[test]
    fn out_of_range_status_is_unknown() {
        assert_eq!(classify_firebase_exchange(&ProbeOutcome::Status(0)), Verdict::UnknownStatus);
        assert_eq!(classify_discovery(&ProbeOutcome::Status(999)), Verdict::UnknownStatus);
        assert!(!Verdict::UnknownStatus.is_healthy());
    }

    #[test]
    fn verdict_serializes_to_its_label() {
        let json = serde_json::to_value(Verdict::Misconfigured404).unwrap();
        assert_eq!(json, Verdict::Misconfigured404.as_str());
    }
}
