//! Diagnostic client for the authentication/discovery backend contract.
//!
//! # Overview
//! Sends two canned requests (a firebase exchange with a placeholder token
//! and an unauthenticated discovery call) and classifies each status code
//! into a `Verdict`: does the route exist, is it misrouted, is the backend
//! reachable at all.
//!
//! # Design
//! - `EndpointProbe` is stateless; it holds only `base_url`.
//! - Requests are built as data and executed through a `Transport`, so the
//!   classification is testable without a network.
//! - Only status codes are inspected, never response bodies.

pub mod error;
pub mod http;
pub mod probe;
pub mod report;
pub mod transport;
pub mod verdict;

pub use error::ProbeError;
pub use http::{HttpMethod, HttpRequest, ProbeOutcome, Transport, TransportFault};
pub use probe::{EndpointProbe, Finding, ProbeKind};
pub use report::{Report, Summary};
pub use transport::UreqTransport;
pub use verdict::{classify_discovery, classify_firebase_exchange, Verdict};
