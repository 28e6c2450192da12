//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Kardex using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Kardex - Patient Register
#[derive(Parser, Debug)]
#[command(name = "kardex")]
#[command(version, about, long_about = None)]
#[command(author = "Kardex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "kardex.toml", env = "KARDEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KARDEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a patient to the register
    Add(commands::add::AddArgs),

    /// List the patients in the register
    List(commands::list::ListArgs),

    /// Remove a patient from the register
    Remove(commands::remove::RemoveArgs),

    /// Update a patient already in the register
    Update(commands::update::UpdateArgs),

    /// Import patients from a CSV file
    Import(commands::import::ImportArgs),

    /// Export the register to a CSV file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
