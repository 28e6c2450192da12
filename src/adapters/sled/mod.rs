//! Persistent register backend
//!
//! Implementation of the register contract on top of the embedded sled
//! storage engine. Patients live in a dedicated tree, keyed by social
//! security number, with the record body encoded as JSON.
//!
//! The storage session is scoped: acquired when the register is opened,
//! released exactly once by `close()`. Operations on a closed register
//! fail with a storage error instead of touching a released resource.

use crate::adapters::register::traits::PatientRegister;
use crate::domain::{KardexError, Patient, Result};
use std::path::Path;

const PATIENTS_TREE: &str = "patients";

/// Register backend persisting patients in a sled database
///
/// External behavior matches [`MemoryRegister`](crate::adapters::memory::MemoryRegister)
/// except that records survive the process and `close()` actually releases
/// a resource.
pub struct SledRegister {
    db: Option<sled::Db>,
    patients: Option<sled::Tree>,
}

impl SledRegister {
    /// Opens (creating if necessary) the sled database at the given path
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::Storage`] if the database cannot be opened,
    /// for example when another process holds the directory lock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening sled register");

        let db = sled::open(path)?;
        let patients = db.open_tree(PATIENTS_TREE)?;

        Ok(Self {
            db: Some(db),
            patients: Some(patients),
        })
    }

    fn tree(&self) -> Result<&sled::Tree> {
        self.patients
            .as_ref()
            .ok_or_else(|| KardexError::Storage("register is closed".to_string()))
    }

    fn encode(patient: &Patient) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(patient)?)
    }

    fn decode(bytes: &[u8]) -> Result<Patient> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn get(&self, key: &str) -> Result<Option<Patient>> {
        match self.tree()?.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(Self::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

impl PatientRegister for SledRegister {
    fn add(&mut self, patient: Patient) -> Result<()> {
        let key = patient.social_security_number().to_string();
        if self.get(&key)?.is_some() {
            return Err(KardexError::DuplicateKey(format!(
                "a patient with social security number {key} already exists"
            )));
        }

        let tree = self.tree()?;
        tree.insert(key.as_bytes(), Self::encode(&patient)?)?;
        tree.flush()?;
        Ok(())
    }

    fn add_all(&mut self, patients: Vec<Patient>) -> Result<()> {
        for patient in patients {
            self.add(patient)?;
        }
        Ok(())
    }

    fn remove(&mut self, patient: &Patient) -> Result<bool> {
        let key = patient.social_security_number();
        let removed = match self.get(key)? {
            Some(stored) if stored == *patient => {
                let tree = self.tree()?;
                tree.remove(key.as_bytes())?;
                tree.flush()?;
                true
            }
            _ => false,
        };
        Ok(removed)
    }

    fn update(&mut self, new_patient: Patient, old_patient: &Patient) -> Result<()> {
        if self.get(old_patient.social_security_number())?.is_none() {
            return Ok(());
        }

        // Uniqueness check before any mutation, as in the in-memory backend.
        if let Some(occupant) = self.get(new_patient.social_security_number())? {
            if occupant != *old_patient {
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
        let mut patients = Vec::new();
        for entry in self.tree()?.iter() {
            let (_, bytes) = entry?;
            patients.push(Self::decode(&bytes)?);
        }
        Ok(patients)
    }

    fn count(&self) -> Result<usize> {
        // Entries in the patients tree, not any engine-internal figure.
        Ok(self.tree()?.len())
    }

    fn close(&mut self) -> Result<()> {
        self.patients.take();
        if let Some(db) = self.db.take() {
            tracing::debug!("Closing sled register");
            db.flush()?;
        }
        Ok(())
    }
}

impl Drop for SledRegister {
    fn drop(&mut self) {
        // Last-resort flush for registers dropped without close(); errors
        // here have nowhere to go.
        if let Some(db) = self.db.take() {
            let _ = db.flush();
        }
    }
}
