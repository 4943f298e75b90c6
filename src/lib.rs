//! shopmicro_health checks the ShopMicro services one by one over HTTP.
//!
//! Every endpoint in [ENDPOINTS] gets a single GET request with a [CHECK_TIMEOUT] timeout.
//! An endpoint is healthy when it answers with HTTP status 200.
//! The results are printed as they come in, followed by a summary line.
//!
//! - [endpoint_check]: performs the request for a single endpoint.
//! - [health_report]: walks all endpoints in order and prints the report.
//!
use std::time::Duration;

pub mod endpoint_check;
pub mod health_report;

/// The endpoints that are checked, in this order.
pub const ENDPOINTS: [&str; 4] = [
    "http://localhost:3001/health",
    "http://localhost:8080",
    "http://localhost:3002/health",
    "http://localhost:3000/login",
];
/// The maximum time a single endpoint check may take.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);
/// The title printed above the report.
pub const BANNER: &str = "ShopMicro Health Check";
