//! Remove command implementation

use super::{failure_exit_code, open_register};
use clap::Args;

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Social security number of the patient to remove
    pub social_security_number: String,
}

impl RemoveArgs {
    /// Execute the remove command
    ///
    /// The register's remove is a compare-and-delete on a full record, so
    /// the stored record is looked up by key first.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let code = match self.remove_by_key(register.as_mut()) {
            Ok(code) => code,
            Err(e) => {
                println!("❌ {e}");
                failure_exit_code(&e)
            }
        };
        register.close()?;
        Ok(code)
    }

    fn remove_by_key(
        &self,
        register: &mut dyn crate::adapters::register::PatientRegister,
    ) -> crate::domain::Result<i32> {
        let stored = register
            .list()?
            .into_iter()
            .find(|p| p.social_security_number() == self.social_security_number);

        match stored {
            Some(patient) => {
                if register.remove(&patient)? {
                    tracing::info!(ssn = %self.social_security_number, "Patient removed");
                    println!("✅ Removed {patient}");
                    Ok(0)
                } else {
                    println!(
                        "❌ Patient with social security number {} could not be removed",
                        self.social_security_number
                    );
                    Ok(1)
                }
            }
            None => {
                println!(
                    "❌ No patient with social security number {}",
                    self.social_security_number
                );
                Ok(1)
            }
        }
    }
}
