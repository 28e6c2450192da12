//! Update command implementation

use super::{failure_exit_code, open_register};
use crate::adapters::register::PatientRegister;
use crate::domain::Result;
use clap::Args;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Social security number of the patient to update
    pub social_security_number: String,

    /// New first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// New social security number (re-keys the patient)
    #[arg(long)]
    pub new_ssn: Option<String>,

    /// New general practitioner (pass an empty string to clear)
    #[arg(long)]
    pub general_practitioner: Option<String>,

    /// New diagnosis (pass an empty string to clear)
    #[arg(long)]
    pub diagnosis: Option<String>,
}

impl UpdateArgs {
    /// Execute the update command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, mut register) = match open_register(config_path) {
            Ok(opened) => opened,
            Err(e) => {
                println!("❌ {e}");
                return Ok(failure_exit_code(&e));
            }
        };

        let code = match self.update_by_key(register.as_mut()) {
            Ok(code) => code,
            Err(e) => {
                println!("❌ {e}");
                failure_exit_code(&e)
            }
        };
        register.close()?;
        Ok(code)
    }

    fn update_by_key(&self, register: &mut dyn PatientRegister) -> Result<i32> {
        let stored = register
            .list()?
            .into_iter()
            .find(|p| p.social_security_number() == self.social_security_number);

        let Some(old_patient) = stored else {
            println!(
                "❌ No patient with social security number {}",
                self.social_security_number
            );
            return Ok(1);
        };

        let mut new_patient = old_patient.clone();
        if let Some(ref first_name) = self.first_name {
            new_patient.set_first_name(first_name);
        }
        if let Some(ref last_name) = self.last_name {
            new_patient.set_last_name(last_name);
        }
        if let Some(ref new_ssn) = self.new_ssn {
            new_patient.set_social_security_number(new_ssn);
        }
        if let Some(ref general_practitioner) = self.general_practitioner {
            new_patient.set_general_practitioner(general_practitioner);
        }
        if let Some(ref diagnosis) = self.diagnosis {
            new_patient.set_diagnosis(diagnosis);
        }

        register.update(new_patient.clone(), &old_patient)?;
        tracing::info!(ssn = %new_patient.social_security_number(), "Patient updated");
        println!("✅ Updated {new_patient}");
        Ok(0)
    }
}
