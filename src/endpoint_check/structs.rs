//! The structs
//!
use std::time::Duration;
use thiserror::Error;

/// The checker holds the http client, which is created once and reused for every endpoint.
#[derive(Debug)]
pub struct EndpointChecker {
    pub(crate) client: reqwest::blocking::Client,
    /// the timeout set on the client, for reporting.
    pub timeout: Duration,
}

/// The reasons an endpoint is considered unhealthy.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request did not produce a response: connection refused, DNS failure or timeout.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// The endpoint responded, but not with 200.
    #[error("status code {0}")]
    Status(u16),
}
