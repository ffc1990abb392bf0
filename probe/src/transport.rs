//! Blocking transport backed by ureq.

use std::io;
use std::time::Duration;

use crate::http::{HttpMethod, HttpRequest, ProbeOutcome, Transport, TransportFault};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// One attempt per request, no retries, every call bounded by `timeout`.
///
/// ureq's status-as-error behavior is disabled so 4xx/5xx come back as
/// `ProbeOutcome::Status` rather than failures.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    fn send(&self, request: &HttpRequest) -> Result<u16, ureq::Error> {
        let response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };
        Ok(response.status().as_u16())
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> ProbeOutcome {
        match self.send(request) {
            Ok(status) => {
                tracing::debug!(method = %request.method, url = %request.url, status, "probe answered");
                ProbeOutcome::Status(status)
            }
            Err(err) => {
                let fault = fault_from(err);
                tracing::warn!(method = %request.method, url = %request.url, %fault, "probe got no response");
                ProbeOutcome::Unreachable(fault)
            }
        }
    }
}

fn fault_from(err: ureq::Error) -> TransportFault {
    match err {
        ureq::Error::Timeout(_) => TransportFault::Timeout,
        ureq::Error::ConnectionFailed => TransportFault::ConnectionRefused,
        ureq::Error::Io(ref io_err) => match io_err.kind() {
            io::ErrorKind::ConnectionRefused => TransportFault::ConnectionRefused,
            io::ErrorKind::TimedOut => TransportFault::Timeout,
            _ => TransportFault::Other(err.to_string()),
        },
        other => TransportFault::Other(other.to_string()),
    }
}
