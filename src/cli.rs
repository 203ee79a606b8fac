//! CLI definitions and entry point

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{debug, warn};

use check_asteroids::CheckError;
use check_asteroids::adapters::{DEFAULT_ENDPOINT, HttpFeedSource};
use check_asteroids::config::{CheckConfig, DEFAULT_CONFIG_PATH};
use check_asteroids::core::services::{ScanMode, ScanReport, run_check};
use check_asteroids::output::{CheckResult, OutputMode};

/// check-asteroids - Alert on potentially hazardous near-Earth objects
#[derive(Parser, Debug)]
#[command(
    name = "check-asteroids",
    version,
    about = "Alert on potentially hazardous near-Earth objects",
    long_about = "Monitoring check for today's near-Earth-object feed.\n\n\
                  Prints one status line and exits 0 (ok), 1 (warning) or 2 (critical),\n\
                  following the Sensu/Nagios plugin convention."
)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Config file holding the API key
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Feed endpoint to query
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (client default if unset)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report only the first object in the feed instead of the worst of all
    #[arg(long)]
    pub first_only: bool,
}

/// Run the CLI and return the result to exit with
pub fn run() -> CheckResult {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let outcome = check(&cli);
    if let Err(e) = &outcome {
        warn!("Check failed: {e}");
    }

    let result = CheckResult::from(outcome);
    result.render(output_mode);
    result
}

fn check(cli: &Cli) -> Result<ScanReport, CheckError> {
    debug!("Loading config from {}", cli.config.display());
    let config = CheckConfig::load(&cli.config)?;

    let source = HttpFeedSource::new(
        cli.endpoint.as_str(),
        config.api_key(),
        cli.timeout.map(Duration::from_secs),
    )?;

    let mode = if cli.first_only {
        ScanMode::First
    } else {
        ScanMode::All
    };
    run_check(&source, mode)
}
