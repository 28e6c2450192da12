//! Register factory
//!
//! This module provides the factory function that creates a register
//! backend based on configuration.

use crate::adapters::memory::MemoryRegister;
use crate::adapters::register::traits::PatientRegister;
use crate::adapters::sled::SledRegister;
use crate::config::schema::{KardexConfig, RegisterBackend};
use crate::domain::Result;

/// Create a register based on the configuration
///
/// This factory function examines the `backend` in the configuration and
/// creates the matching register implementation. Backend selection is a
/// startup decision: the rest of the application only ever sees the
/// [`PatientRegister`] trait object.
///
/// # Errors
///
/// Returns an error if the persistent backend cannot open its database.
pub fn create_register(config: &KardexConfig) -> Result<Box<dyn PatientRegister>> {
    match config.backend {
        RegisterBackend::Memory => {
            tracing::info!("Creating in-memory register");
            Ok(Box::new(MemoryRegister::new()))
        }
        RegisterBackend::Sled => {
            let storage = config
                .storage
                .as_ref()
                .expect("storage config should be validated");

            tracing::info!(path = %storage.path, "Creating sled register");
            let register = SledRegister::open(&storage.path)?;
            Ok(Box::new(register))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ApplicationConfig, CsvConfig, LoggingConfig, StorageConfig};
    use tempfile::TempDir;

    fn config(backend: RegisterBackend, storage: Option<StorageConfig>) -> KardexConfig {
        KardexConfig {
            application: ApplicationConfig::default(),
            backend,
            storage,
            csv: CsvConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_create_memory_register() {
        let config = config(RegisterBackend::Memory, None);
        let register = create_register(&config).unwrap();
        assert_eq!(register.count().unwrap(), 0);
    }

    #[test]
    fn test_create_sled_register() {
        let dir = TempDir::new().unwrap();
        let storage = StorageConfig {
            path: dir.path().to_string_lossy().to_string(),
        };
        let config = config(RegisterBackend::Sled, Some(storage));

        let mut register = create_register(&config).unwrap();
        assert_eq!(register.count().unwrap(), 0);
        register.close().unwrap();
    }
}
