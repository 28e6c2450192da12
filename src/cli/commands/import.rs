//! Import command implementation
//!
//! Bulk-loads patients from a CSV file into the configured register.

use super::{failure_exit_code, open_register};
use crate::adapters::csv::CsvCodec;
use crate::domain::KardexError;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import
    pub file: PathBuf,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (config, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let codec = CsvCodec::new(config.csv.delimiter_byte());
        let patients = match codec.read(Some(&self.file)) {
            Ok(patients) => patients,
            Err(e) => {
                println!("❌ {e}");
                register.close()?;
                return Ok(failure_exit_code(&e));
            }
        };

        let total = patients.len();
        let result = register.add_all(patients);
        let count = register.count();
        register.close()?;

        match result {
            Ok(()) => {
                tracing::info!(count = total, file = %self.file.display(), "Import complete");
                println!("✅ Imported {total} patient(s) from {}", self.file.display());
                Ok(0)
            }
            Err(e @ KardexError::DuplicateKey(_)) => {
                // add_all stops at the first duplicate; whatever was added
                // before it stays in the register.
                println!("❌ Import stopped: {e}");
                if let Ok(count) = count {
                    println!("   The register now holds {count} patient(s); records imported before the duplicate were kept");
                }
                Ok(1)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(failure_exit_code(&e))
            }
        }
    }
}
