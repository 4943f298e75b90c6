//! The impls and functions
//!
use std::time::Duration;
use log::*;
use anyhow::Context;
use reqwest::StatusCode;
use crate::endpoint_check::{EndpointChecker, CheckError};
use crate::CHECK_TIMEOUT;

impl EndpointChecker {
    /// Create a checker with the default timeout ([CHECK_TIMEOUT]).
    pub fn new() -> anyhow::Result<Self> {
        EndpointChecker::with_timeout(CHECK_TIMEOUT)
    }
    pub fn with_timeout(
        timeout: Duration,
    ) -> anyhow::Result<Self>
    {
        // all endpoints are local addresses, so these should never go via a proxy.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .with_context(|| "Unable to create the http client")?;
        Ok(EndpointChecker { client, timeout })
    }
    /// Perform a GET request on `url`.
    ///
    /// Only a response with status 200 is a success.
    /// The response is dropped before returning, which releases the body and the connection.
    pub fn check(
        &self,
        url: &str,
    ) -> Result<(), CheckError>
    {
        let response = self.client
            .get(url)
            .send()
            .map_err(|e| {
                debug!("Non-Ok response: {}: {}", url, e);
                CheckError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK
        {
            debug!("Non success response: {} = {}", url, status);
            return Err(CheckError::Status(status.as_u16()));
        }
        debug!("Success response: {} = {}", url, status);
        Ok(())
    }
}
