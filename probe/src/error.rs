//! Error types for the endpoint probe.
//!
//! # Design
//! Network trouble is never an error here: a probe that gets no response
//! yields `ProbeOutcome::Unreachable` and is reported like any other verdict.
//! The only failures left are local encoding problems.

/// Errors returned by `EndpointProbe` and `Report` rendering.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The canned request body could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The report could not be rendered as JSON.
    #[error("report rendering failed: {0}")]
    Render(#[source] serde_json::Error),
}
