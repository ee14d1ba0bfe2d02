//! Fitness Tracker CLI
//!
//! Prints daily step and training reports for records given on the
//! command line.

use anyhow::Result;
use clap::Parser;
use fitness_tracker::{config::AppConfig, run, Cli};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load()?;
    debug!(?config, "Configuration loaded");

    match run(&cli, &config) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: u8) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => "fitness_tracker=info,fitness_tracker_shared=warn".into(),
            1 => "fitness_tracker=debug,fitness_tracker_shared=debug".into(),
            _ => "fitness_tracker=trace,fitness_tracker_shared=trace".into(),
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
