//! Fitness Tracker command-line library
//!
//! Exposes the configuration and command handlers used by the
//! `fitness-tracker` binary so they can be exercised by integration tests.

pub mod commands;
pub mod config;

pub use commands::{run, Cli, Commands};
pub use config::{AppConfig, OutputFormat};
