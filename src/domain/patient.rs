//! Patient domain model
//!
//! This module defines the Patient type, the single record kind the register
//! stores, keyed by social security number.

use super::errors::KardexError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single patient in the register
///
/// Holds the patient's name, social security number (the unique key), and
/// the optional general practitioner and diagnosis. The three required
/// fields are validated at construction and can never become blank
/// afterwards: the mutating setters silently ignore blank input.
///
/// Equality is structural over all five fields, which is what the
/// register's compare-and-delete `remove` relies on.
///
/// # Examples
///
/// ```
/// use kardex::domain::Patient;
///
/// let patient = Patient::builder("Nina", "Olsen", "01019912345")
///     .general_practitioner("Dr. Strand")
///     .build()
///     .unwrap();
///
/// assert_eq!(patient.full_name(), "Nina Olsen");
/// assert_eq!(patient.diagnosis(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    first_name: String,
    last_name: String,
    social_security_number: String,
    general_practitioner: String,
    diagnosis: String,
}

impl Patient {
    /// Creates a new Patient with the given required fields
    ///
    /// The optional fields default to the empty string; use
    /// [`Patient::builder`] to set them at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::Validation`] if any of the required fields
    /// is blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(first_name, last_name, social_security_number).build()
    }

    /// Creates a new builder holding the given required fields
    ///
    /// The required fields are stored as given and only validated by
    /// [`PatientBuilder::build`].
    pub fn builder(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> PatientBuilder {
        PatientBuilder {
            first_name: first_name.into(),
            last_name: last_name.into(),
            social_security_number: social_security_number.into(),
            general_practitioner: String::new(),
            diagnosis: String::new(),
        }
    }

    /// Returns the patient's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the patient's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the first and last name joined with a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the patient's social security number, the unique key
    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }

    /// Returns the name of the patient's general practitioner
    pub fn general_practitioner(&self) -> &str {
        &self.general_practitioner
    }

    /// Returns the patient's diagnosis
    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    /// Sets the patient's first name, ignoring blank input
    pub fn set_first_name(&mut self, first_name: &str) {
        if !first_name.trim().is_empty() {
            self.first_name = first_name.to_string();
        }
    }

    /// Sets the patient's last name, ignoring blank input
    pub fn set_last_name(&mut self, last_name: &str) {
        if !last_name.trim().is_empty() {
            self.last_name = last_name.to_string();
        }
    }

    /// Sets the patient's social security number, ignoring blank input
    ///
    /// The key must not be changed on a patient that a register currently
    /// stores; route key changes through the register's `update` so the
    /// uniqueness check runs.
    pub fn set_social_security_number(&mut self, social_security_number: &str) {
        if !social_security_number.trim().is_empty() {
            self.social_security_number = social_security_number.to_string();
        }
    }

    /// Sets the general practitioner
    ///
    /// A blank value is accepted and resets the field to empty.
    pub fn set_general_practitioner(&mut self, general_practitioner: &str) {
        self.general_practitioner = general_practitioner.to_string();
    }

    /// Sets the diagnosis
    ///
    /// A blank value is accepted and resets the field to empty.
    pub fn set_diagnosis(&mut self, diagnosis: &str) {
        self.diagnosis = diagnosis.to_string();
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, with ID: {}", self.full_name(), self.social_security_number)
    }
}

/// Builder for constructing Patient instances
///
/// Holds the raw inputs and validates only at the terminal [`build`](Self::build)
/// step, so a builder can be filled from unvalidated sources (a CSV row, a
/// form) before the single validation point.
#[derive(Debug)]
pub struct PatientBuilder {
    first_name: String,
    last_name: String,
    social_security_number: String,
    general_practitioner: String,
    diagnosis: String,
}

impl PatientBuilder {
    /// Sets the general practitioner
    pub fn general_practitioner(mut self, general_practitioner: impl Into<String>) -> Self {
        self.general_practitioner = general_practitioner.into();
        self
    }

    /// Sets the diagnosis
    pub fn diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = diagnosis.into();
        self
    }

    /// Builds the Patient
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::Validation`] if any of the required fields
    /// is blank, exactly as [`Patient::new`] does.
    pub fn build(self) -> Result<Patient> {
        if self.first_name.trim().is_empty() {
            return Err(KardexError::Validation(
                "first name cannot be blank".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(KardexError::Validation(
                "last name cannot be blank".to_string(),
            ));
        }
        if self.social_security_number.trim().is_empty() {
            return Err(KardexError::Validation(
                "social security number cannot be blank".to_string(),
            ));
        }

        Ok(Patient {
            first_name: self.first_name,
            last_name: self.last_name,
            social_security_number: self.social_security_number,
            general_practitioner: self.general_practitioner,
            diagnosis: self.diagnosis,
        })
    }
}
