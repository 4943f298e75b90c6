//! shopmicro_health: check whether the ShopMicro services respond healthy.
//!
//! The process exits with code 0 if every endpoint responded with HTTP 200, and 1 otherwise.
//! Logging is written to stderr and is set with RUST_LOG, which can also be set in a `.env` file.
use std::process;
use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::*;

use shopmicro_health::health_report;

/// Check the ShopMicro service endpoints and report their health.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {}

fn main() -> Result<()>
{
    dotenv().ok();
    env_logger::init();
    let options = Opts::parse();
    debug!("{:?}", options);

    let healthsummary = health_report::print_health_check()?;

    info!("exit code: {}", healthsummary.exit_code());
    process::exit(healthsummary.exit_code());
}
