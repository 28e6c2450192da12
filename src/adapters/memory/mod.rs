//! In-memory register backend
//!
//! Map-backed implementation of the register contract. Nothing survives the
//! process; this is the backend for sessions that deliberately start empty
//! and for tests.

use crate::adapters::register::traits::PatientRegister;
use crate::domain::{KardexError, Patient, Result};
use std::collections::HashMap;

/// Register backend holding patients in a `HashMap`
///
/// Keys are social security numbers. All operations are infallible apart
/// from the duplicate-key checks, but they return `Result` to satisfy the
/// shared contract.
#[derive(Debug, Default)]
pub struct MemoryRegister {
    patients: HashMap<String, Patient>,
}

impl MemoryRegister {
    /// Creates a new, empty in-memory register
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRegister for MemoryRegister {
    fn add(&mut self, patient: Patient) -> Result<()> {
        let key = patient.social_security_number().to_string();
        if self.patients.contains_key(&key) {
            return Err(KardexError::DuplicateKey(format!(
                "a patient with social security number {key} already exists"
            )));
        }
        self.patients.insert(key, patient);
        Ok(())
    }

    fn add_all(&mut self, patients: Vec<Patient>) -> Result<()> {
        for patient in patients {
            self.add(patient)?;
        }
        Ok(())
    }

    fn remove(&mut self, patient: &Patient) -> Result<bool> {
        let removed = match self.patients.get(patient.social_security_number()) {
            Some(stored) if stored == patient => {
                self.patients.remove(patient.social_security_number());
                true
            }
            _ => false,
        };
        Ok(removed)
    }

    fn update(&mut self, new_patient: Patient, old_patient: &Patient) -> Result<()> {
        if !self
            .patients
            .contains_key(old_patient.social_security_number())
        {
            return Ok(());
        }

        // Uniqueness check before any mutation: the slot the new key would
        // occupy must be free or held by the record being replaced.
        if let Some(occupant) = self.patients.get(new_patient.social_security_number()) {
            if occupant != old_patient {
                return Err(KardexError::DuplicateKey(format!(
                    "a patient with social security number {} already exists",
                    new_patient.social_security_number()
                )));
            }
        }

        self.remove(old_patient)?;
        self.add(new_patient)
    }

    fn list(&self) -> Result<Vec<Patient>> {
        Ok(self.patients.values().cloned().collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.patients.len())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
