//! Command-line definition and command handlers

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use fitness_tracker_shared::{
    daily_step_report, summarize_day, summarize_training, training_report, UserProfile,
};
use tracing::{info, warn};

use crate::config::{AppConfig, OutputFormat};

/// Distance, speed and calorie reports from step records
#[derive(Parser, Debug)]
#[command(name = "fitness-tracker", version)]
#[command(about = "Distance, speed and calorie reports from step records", long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Body weight in kilograms (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Height in centimeters (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Output format (overrides config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Daily summary from a "steps,duration" record, e.g. "5000,30m"
    Day {
        /// The step record
        record: String,
    },
    /// Training summary from a "steps,activity,duration" record, e.g. "5000,Бег,30m"
    Training {
        /// The training record
        record: String,
    },
}

/// Message returned when the daily report comes back empty
pub const NO_DAILY_REPORT: &str = "no daily report could be produced";

impl Cli {
    /// Body measurements from flags, falling back to config
    pub fn profile(&self, config: &AppConfig) -> UserProfile {
        UserProfile::new(
            self.weight.unwrap_or(config.profile.weight_kg),
            self.height.unwrap_or(config.profile.height_cm),
        )
    }

    pub fn output_format(&self, config: &AppConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

/// Run the parsed command and return what should be printed
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String> {
    let profile = cli.profile(config);
    let format = cli.output_format(config);

    match &cli.command {
        Commands::Day { record } => day_command(record, &profile, format),
        Commands::Training { record } => training_command(record, &profile, format),
    }
}

/// Daily report; failure details stay in the log
pub fn day_command(record: &str, profile: &UserProfile, format: OutputFormat) -> Result<String> {
    info!(record, "Building daily step report");

    match format {
        OutputFormat::Text => {
            let report = daily_step_report(record, profile.weight_kg, profile.height_cm);
            if report.is_empty() {
                return Err(anyhow!(NO_DAILY_REPORT));
            }
            Ok(report)
        }
        OutputFormat::Json => {
            let summary = summarize_day(record, profile).map_err(|err| {
                warn!(error = %err, "Failed to build daily step report");
                anyhow!(NO_DAILY_REPORT)
            })?;
            Ok(serde_json::to_string_pretty(&summary)? + "\n")
        }
    }
}

/// Training report; errors are returned with their message
pub fn training_command(
    record: &str,
    profile: &UserProfile,
    format: OutputFormat,
) -> Result<String> {
    info!(record, "Building training report");

    match format {
        OutputFormat::Text => Ok(training_report(record, profile.weight_kg, profile.height_cm)?),
        OutputFormat::Json => {
            let summary = summarize_training(record, profile)?;
            Ok(serde_json::to_string_pretty(&summary)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "fitness-tracker",
            "--weight",
            "82.5",
            "--format",
            "json",
            "day",
            "5000,30m",
        ])
        .unwrap();
        let config = AppConfig::default();

        assert_eq!(cli.profile(&config), UserProfile::new(82.5, 175.0));
        assert_eq!(cli.output_format(&config), OutputFormat::Json);
    }

    #[test]
    fn test_config_used_without_flags() {
        let cli = Cli::try_parse_from(["fitness-tracker", "training", "5000,Бег,30m"]).unwrap();
        let config = AppConfig::default();

        assert_eq!(cli.profile(&config), UserProfile::new(70.0, 175.0));
        assert_eq!(cli.output_format(&config), OutputFormat::Text);
    }

    #[test]
    fn test_negative_weight_is_accepted_as_value() {
        let cli =
            Cli::try_parse_from(["fitness-tracker", "--weight", "-5", "day", "5000,30m"]).unwrap();
        assert_eq!(cli.weight, Some(-5.0));
    }
}
