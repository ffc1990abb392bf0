//! Aggregation of the two findings into a summary and next steps.

use std::fmt;

use serde::Serialize;

use crate::error::ProbeError;
use crate::http::ProbeOutcome;
use crate::probe::Finding;
use crate::verdict::Verdict;

const RULE: &str = "==================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Summary {
    AllHealthy,
    DiscoveryBroken,
    ExchangeBroken,
    ExchangeServerError,
}

impl Summary {
    /// First match wins: a broken exchange outranks everything else.
    ///
    /// An exchange answering 500 with a healthy discovery gets its own
    /// `ExchangeServerError` summary pointing at the Firebase SDK setup,
    /// rather than being folded into `AllHealthy`.
    pub fn select(exchange: Verdict, discovery: Verdict) -> Self {
        if !exchange.is_healthy() {
            Summary::ExchangeBroken
        } else if !discovery.is_healthy() {
            Summary::DiscoveryBroken
        } else if exchange == Verdict::ServerError500 {
            Summary::ExchangeServerError
        } else {
            Summary::AllHealthy
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Summary::AllHealthy => "backend routing OK, endpoints reachable",
            Summary::DiscoveryBroken => "firebase exchange OK, discovery broken",
            Summary::ExchangeBroken => "firebase exchange broken, URL misconfigured or backend down",
            Summary::ExchangeServerError => {
                "endpoints reachable, firebase exchange fails internally"
            }
        }
    }

    pub fn hints(self) -> &'static [&'static str] {
        match self {
            Summary::AllHealthy => &[
                "remaining problems are likely in the Firebase Admin SDK configuration",
                "or in the environment variables",
                "or in the Firebase keys",
            ],
            Summary::DiscoveryBroken => &["check the discovery URL configuration"],
            Summary::ExchangeBroken => &["follow the backend URL configuration guide"],
            Summary::ExchangeServerError => &["check the Firebase SDK configuration"],
        }
    }

    /// True when a route is missing or the backend could not be reached.
    pub fn is_failure(self) -> bool {
        matches!(self, Summary::ExchangeBroken | Summary::DiscoveryBroken)
    }

    pub fn next_steps(self) -> &'static [&'static str] {
        match self {
            Summary::ExchangeBroken => &[
                "check the main and app URL configuration",
                "restart the backend server",
                "re-run this diagnostic",
            ],
            Summary::AllHealthy | Summary::DiscoveryBroken | Summary::ExchangeServerError => &[
                "check the Firebase configuration module",
                "check the Firebase environment variables",
                "test from the client application",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub base_url: String,
    pub exchange: Finding,
    pub discovery: Finding,
    pub summary: Summary,
    pub next_steps: Vec<String>,
}

impl Report {
    pub fn new(base_url: &str, exchange: Finding, discovery: Finding) -> Self {
        let summary = Summary::select(exchange.verdict, discovery.verdict);
        Self {
            base_url: base_url.to_string(),
            exchange,
            discovery,
            summary,
            next_steps: summary.next_steps().iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ProbeError> {
        serde_json::to_string_pretty(self).map_err(ProbeError::Render)
    }
}

fn write_finding(f: &mut fmt::Formatter<'_>, index: usize, finding: &Finding) -> fmt::Result {
    writeln!(f, "[{index}] {} {} {}", finding.probe.label(), finding.method, finding.url)?;
    match &finding.outcome {
        ProbeOutcome::Status(status) => writeln!(f, "    status: {status}")?,
        ProbeOutcome::Unreachable(_) => writeln!(f, "    status: no response")?,
    }
    let tag = match finding.verdict {
        Verdict::OkEndpointExists => "OK",
        Verdict::ServerError500 => "WARN",
        Verdict::Misconfigured404 | Verdict::Unreachable | Verdict::UnknownStatus => "FAIL",
    };
    writeln!(f, "    {tag} {}: {}", finding.verdict.as_str(), finding.message)?;
    if let Some(recommendation) = &finding.recommendation {
        writeln!(f, "    fix: {recommendation}")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ENDPOINT DIAGNOSTIC {}", self.base_url)?;
        writeln!(f, "{RULE}")?;
        write_finding(f, 1, &self.exchange)?;
        write_finding(f, 2, &self.discovery)?;
        writeln!(f)?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", self.summary.headline())?;
        for hint in self.summary.hints() {
            writeln!(f, "  - {hint}")?;
        }
        writeln!(f)?;
        writeln!(f, "NEXT STEPS")?;
        for (i, step) in self.next_steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpRequest, TransportFault};
    use crate::probe::EndpointProbe;

    fn report_for(exchange: ProbeOutcome, discovery: ProbeOutcome) -> Report {
        let transport = |req: &HttpRequest| {
            if req.url.ends_with(crate::probe::FIREBASE_EXCHANGE_PATH) {
                exchange.clone()
            } else {
                discovery.clone()
            }
        };
        EndpointProbe::new("http://localhost:8000").run(&transport).unwrap()
    }

    #[test]
    fn broken_exchange_wins_regardless_of_discovery() {
        assert_eq!(
            Summary::select(Verdict::Misconfigured404, Verdict::OkEndpointExists),
            Summary::ExchangeBroken
        );
        assert_eq!(
            Summary::select(Verdict::Unreachable, Verdict::Misconfigured404),
            Summary::ExchangeBroken
        );
    }

    #[test]
    fn broken_discovery_outranks_exchange_server_error() {
        assert_eq!(
            Summary::select(Verdict::ServerError500, Verdict::Misconfigured404),
            Summary::DiscoveryBroken
        );
    }

    #[test]
    fn exchange_server_error_gets_its_own_summary() {
        assert_eq!(
            Summary::select(Verdict::ServerError500, Verdict::OkEndpointExists),
            Summary::ExchangeServerError
        );
        assert!(!Summary::ExchangeServerError.is_failure());
    }

    #[test]
    fn healthy_pair_is_all_healthy() {
        let report = report_for(ProbeOutcome::Status(400), ProbeOutcome::Status(401));
        assert_eq!(report.summary, Summary::AllHealthy);
        assert_eq!(report.next_steps[0], "check the Firebase configuration module");
    }

    #[test]
    fn routing_checklist_follows_broken_exchange() {
        let report = report_for(ProbeOutcome::Status(404), ProbeOutcome::Status(401));
        assert_eq!(report.summary, Summary::ExchangeBroken);
        assert!(report.summary.is_failure());
        assert_eq!(report.next_steps.len(), 3);
        assert_eq!(report.next_steps[1], "restart the backend server");
    }

    #[test]
    fn text_rendering_lists_findings_and_steps() {
        let report = report_for(
            ProbeOutcome::Status(404),
            ProbeOutcome::Unreachable(TransportFault::ConnectionRefused),
        );
        let text = report.to_string();
        assert!(text.contains("[1] firebase exchange POST http://localhost:8000/api/v1/auth/firebase-exchange/"));
        assert!(text.contains("FAIL MISCONFIGURED_404"));
        assert!(text.contains("fix: check the URL routing configuration"));
        assert!(text.contains("status: no response"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("1. check the main and app URL configuration"));
    }

    #[test]
    fn json_rendering_uses_contract_labels() {
        let report = report_for(ProbeOutcome::Status(500), ProbeOutcome::Status(401));
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["summary"], "EXCHANGE_SERVER_ERROR");
        assert_eq!(json["exchange"]["verdict"], "SERVER_ERROR_500");
        assert_eq!(json["exchange"]["outcome"]["status"], 500);
        assert_eq!(json["discovery"]["probe"], "discovery");
        assert!(json["discovery"].get("recommendation").is_none());
    }
}
