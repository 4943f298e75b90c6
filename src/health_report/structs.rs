//! The structs
//!
use std::time::Duration;
use chrono::{DateTime, Local};
use crate::endpoint_check::CheckError;

/// The outcome of checking a single endpoint.
#[derive(Debug)]
pub struct EndpointHealth {
    pub url: String,
    /// the moment the check started.
    pub timestamp: DateTime<Local>,
    pub elapsed: Duration,
    pub result: Result<(), CheckError>,
}

/// This struct is a wrapper for the EndpointHealth structs of a single run.
#[derive(Debug, Default)]
pub struct HealthSummary {
    pub endpoint_health: Vec<EndpointHealth>,
}
