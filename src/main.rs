// Kardex - Patient Register
// Copyright (c) 2025 Kardex Contributors
// Licensed under the MIT License

use clap::Parser;
use kardex::cli::{Cli, Commands};
use kardex::config::{load_config, LoggingConfig};
use kardex::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging is initialized before the command runs, so the log level and
    // file settings come from the config file when one loads; a broken or
    // absent config falls back to console-only defaults and the command
    // itself reports the configuration error.
    let (log_level, logging_config) = match load_config(&cli.config) {
        Ok(config) => (
            cli.log_level
                .clone()
                .unwrap_or(config.application.log_level),
            config.logging,
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Kardex - Patient Register");

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Add(args) => args.execute(&cli.config),
        Commands::List(args) => args.execute(&cli.config),
        Commands::Remove(args) => args.execute(&cli.config),
        Commands::Update(args) => args.execute(&cli.config),
        Commands::Import(args) => args.execute(&cli.config),
        Commands::Export(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
