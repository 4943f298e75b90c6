//! The impls and functions
//!
use chrono::Local;
use std::{io::{self, Write}, time::Instant};
use log::*;
use colored::*;
use anyhow::{Context, Result};
use crate::endpoint_check::EndpointChecker;
use crate::health_report::{EndpointHealth, HealthSummary};
use crate::{BANNER, ENDPOINTS};

impl HealthSummary {
    pub fn new() -> Self {
        Default::default()
    }
    /// True if every endpoint responded with 200.
    pub fn is_healthy(&self) -> bool {
        self.endpoint_health
            .iter()
            .all(|r| r.result.is_ok())
    }
    pub fn failed_count(&self) -> usize {
        self.endpoint_health
            .iter()
            .filter(|r| r.result.is_err())
            .count()
    }
    /// 0 if all endpoints are healthy, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_healthy() { 0 } else { 1 }
    }
}

/// Check every endpoint in `endpoints` in order, and write the report to `writer`.
///
/// A failed endpoint is reported and the next endpoint is checked.
/// Only errors writing the report are returned as error.
pub fn check_endpoints<W: Write>(
    checker: &EndpointChecker,
    endpoints: &[&str],
    writer: &mut W,
) -> Result<HealthSummary>
{
    info!("begin health check, endpoints: {}, timeout: {:?}", endpoints.len(), checker.timeout);
    let timer = Instant::now();

    writeln!(writer, "{}", BANNER)?;
    writeln!(writer, "{}", "=".repeat(BANNER.len()))?;

    let mut healthsummary = HealthSummary::new();

    for endpoint in endpoints
    {
        // flushed so the endpoint that is being waited on is visible.
        write!(writer, "Checking {}... ", endpoint)?;
        writer.flush()?;

        let timestamp = Local::now();
        let check_timer = Instant::now();
        let result = checker.check(endpoint);
        let elapsed = check_timer.elapsed();

        match &result
        {
            Ok(()) => {
                debug!("{}: healthy, elapsed: {:?}", endpoint, elapsed);
                writeln!(writer, "{}", "OK".green())?;
            }
            Err(e) => {
                warn!("{}: unhealthy, elapsed: {:?}, cause: {}", endpoint, elapsed, e);
                writeln!(writer, "{}: {}", "FAIL".red(), e)?;
            }
        }

        healthsummary.endpoint_health.push(EndpointHealth {
            url: endpoint.to_string(),
            timestamp,
            elapsed,
            result,
        });
    }

    writeln!(writer)?;
    if healthsummary.is_healthy()
    {
        writeln!(writer, "All services are healthy!")?;
    }
    else
    {
        writeln!(writer, "Some services are unhealthy!")?;
    }
    writer.flush()?;

    info!("end health check, failed: {}, elapsed: {:?}", healthsummary.failed_count(), timer.elapsed());

    Ok(healthsummary)
}

/// Check the fixed list of endpoints ([ENDPOINTS]) and print the report to stdout.
pub fn print_health_check() -> Result<HealthSummary>
{
    let checker = EndpointChecker::new()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    check_endpoints(&checker, &ENDPOINTS, &mut handle)
        .with_context(|| "Unable to write the health report to stdout")
}
