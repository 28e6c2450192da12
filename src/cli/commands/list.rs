//! List command implementation

use super::{failure_exit_code, open_register};
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let result = register.list();
        register.close()?;

        let mut patients = match result {
            Ok(patients) => patients,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        if patients.is_empty() {
            println!("The register is empty");
            return Ok(0);
        }

        // Storage order is not significant; sort for stable output.
        patients.sort_by(|a, b| {
            a.social_security_number()
                .cmp(b.social_security_number())
        });

        println!(
            "{:<20} {:<20} {:<15} {:<20} {}",
            "First name", "Last name", "SSN", "General practitioner", "Diagnosis"
        );
        for patient in &patients {
            println!(
                "{:<20} {:<20} {:<15} {:<20} {}",
                patient.first_name(),
                patient.last_name(),
                patient.social_security_number(),
                patient.general_practitioner(),
                patient.diagnosis()
            );
        }
        println!();
        println!("{} patient(s) in the register", patients.len());
        Ok(0)
    }
}
