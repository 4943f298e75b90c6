//! Module for checking a single endpoint.
//!
//! A check is a single HTTP GET request, bounded by a timeout.
//! The outcome is one of:
//! - success: the endpoint responded with HTTP status 200.
//! - [CheckError::Network]: the request could not be performed (connection refused, DNS failure, timeout).
//! - [CheckError::Status]: the endpoint responded with any status other than 200.
//!
//! The check is called from:
//! - [crate::health_report::check_endpoints] (for every endpoint in the list, in order)
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
