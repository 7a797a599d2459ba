//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for cf-offers using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// cf-offers - Content Fragment to Adobe Target offer export
#[derive(Parser, Debug)]
#[command(name = "cf-offers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cf-offers.toml", env = "CF_OFFERS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CF_OFFERS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the export action once and print its response
    Export(commands::export::ExportArgs),

    /// Serve the export action over HTTP
    Serve(commands::serve::ServeArgs),

    /// Drive the export modal for a batch file
    Modal(commands::modal::ModalArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
