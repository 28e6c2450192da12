//! Add command implementation

use super::{failure_exit_code, open_register};
use crate::domain::Patient;
use clap::Args;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// First name of the patient
    pub first_name: String,

    /// Last name of the patient
    pub last_name: String,

    /// Social security number (the unique key)
    pub social_security_number: String,

    /// Name of the patient's general practitioner
    #[arg(short, long, default_value = "")]
    pub general_practitioner: String,

    /// Diagnosis
    #[arg(short, long, default_value = "")]
    pub diagnosis: String,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let patient = match Patient::builder(
            &self.first_name,
            &self.last_name,
            &self.social_security_number,
        )
        .general_practitioner(&self.general_practitioner)
        .diagnosis(&self.diagnosis)
        .build()
        {
            Ok(patient) => patient,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let (_, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let result = register.add(patient.clone());
        register.close()?;

        match result {
            Ok(()) => {
                tracing::info!(ssn = %patient.social_security_number(), "Patient added");
                println!("✅ Added {patient}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(failure_exit_code(&e))
            }
        }
    }
}
