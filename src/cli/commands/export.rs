//! Export command implementation
//!
//! Writes the register contents to a CSV file.

use super::{failure_exit_code, open_register};
use crate::adapters::csv::CsvCodec;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination CSV file (overwritten if it exists)
    pub file: PathBuf,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (config, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let result = register.list();
        register.close()?;

        let patients = match result {
            Ok(patients) => patients,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        if patients.is_empty() {
            println!("The register is empty, nothing to export");
            return Ok(0);
        }

        let codec = CsvCodec::new(config.csv.delimiter_byte());
        match codec.write(Some(&self.file), &patients) {
            Ok(()) => {
                tracing::info!(count = patients.len(), file = %self.file.display(), "Export complete");
                println!(
                    "✅ Exported {} patient(s) to {}",
                    patients.len(),
                    self.file.display()
                );
                Ok(0)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(failure_exit_code(&e))
            }
        }
    }
}
