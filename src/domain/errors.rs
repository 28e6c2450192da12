//! Domain error types
//!
//! This module defines the error hierarchy for Kardex. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Kardex error type
///
/// This is the primary error type used throughout the application.
/// Every failure the register, codec, or configuration layer can produce
/// maps onto one of these variants; all of them are expected, recoverable
/// conditions that must never crash the process.
#[derive(Debug, Error)]
pub enum KardexError {
    /// A required patient field was blank at construction/build time
    #[error("Validation error: {0}")]
    Validation(String),

    /// An add or update would create two patients sharing a social security number
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A CSV header did not match the expected column set
    #[error("Schema error: expected CSV header '{expected}', found '{found}'")]
    Schema {
        /// The header the codec requires, joined with the active delimiter
        expected: String,
        /// The header actually present in the file
        found: String,
    },

    /// Underlying storage is unreadable or unwritable
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage engine errors (persistent register backend)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for KardexError {
    fn from(err: std::io::Error) -> Self {
        KardexError::Io(err.to_string())
    }
}

// The csv crate wraps both I/O and parse failures; by the time a file has
// passed the header check, anything it reports is a read/write problem.
impl From<csv::Error> for KardexError {
    fn from(err: csv::Error) -> Self {
        KardexError::Io(err.to_string())
    }
}

impl From<sled::Error> for KardexError {
    fn from(err: sled::Error) -> Self {
        KardexError::Storage(err.to_string())
    }
}

// Record encoding lives in the sled backend, so a serde failure there is a
// storage failure from the caller's point of view.
impl From<serde_json::Error> for KardexError {
    fn from(err: serde_json::Error) -> Self {
        KardexError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for KardexError {
    fn from(err: toml::de::Error) -> Self {
        KardexError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = KardexError::Validation("first name cannot be blank".to_string());
        assert_eq!(err.to_string(), "Validation error: first name cannot be blank");
    }

    #[test]
    fn test_schema_error_embeds_expected_header() {
        let err = KardexError::Schema {
            expected: "firstName;lastName;generalPractitioner;socialSecurityNumber;diagnosis"
                .to_string(),
            found: "name;ssn".to_string(),
        };
        assert!(err.to_string().contains("firstName;lastName"));
        assert!(err.to_string().contains("name;ssn"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KardexError = io_err.into();
        assert!(matches!(err, KardexError::Io(_)));
    }

    #[test]
    fn test_sled_error_conversion() {
        let sled_err = sled::Error::Unsupported("test".to_string());
        let err: KardexError = sled_err.into();
        assert!(matches!(err, KardexError::Storage(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: KardexError = toml_err.into();
        assert!(matches!(err, KardexError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_kardex_error_implements_std_error() {
        let err = KardexError::DuplicateKey("123".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
