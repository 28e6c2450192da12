//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Kardex configuration file.

use crate::config::load_config;
use crate::config::schema::RegisterBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        // load_config already validated; re-running gives the summary path
        // a single exit point for both outcomes.
        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);

                match config.backend {
                    RegisterBackend::Memory => {
                        println!("  Backend: memory");
                    }
                    RegisterBackend::Sled => {
                        println!("  Backend: sled");
                        if let Some(ref storage) = config.storage {
                            println!("  Storage Path: {}", storage.path);
                        }
                    }
                }

                println!("  CSV Delimiter: '{}'", config.csv.delimiter);
                println!("  File Logging: {}", config.logging.local_enabled);
                if config.logging.local_enabled {
                    println!("  Log Path: {}", config.logging.local_path);
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
