//! Module for checking all endpoints and printing the health report.
//!
//! The endpoints are checked one after another, in the order of the list.
//! A failing endpoint never stops the run: every endpoint is always checked.
//! The report looks like:
//! ```text
//! ShopMicro Health Check
//! ======================
//! Checking http://localhost:3001/health... OK
//! Checking http://localhost:8080... FAIL: status code 404
//!
//! Some services are unhealthy!
//! ```
//! The [HealthSummary] that is returned provides the exit code for the process.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
