//! Command implementations

pub mod add;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod update;
pub mod validate;

use crate::adapters::register::{create_register, PatientRegister};
use crate::config::{load_config, KardexConfig};
use crate::domain::{KardexError, Result};

/// Loads the configuration and opens the configured register backend
pub(crate) fn open_register(config_path: &str) -> Result<(KardexConfig, Box<dyn PatientRegister>)> {
    let config = load_config(config_path)?;
    let register = create_register(&config)?;
    Ok((config, register))
}

/// Maps an expected failure onto the process exit code
///
/// Configuration problems exit with 2; every other domain error is an
/// expected, recoverable failure and exits with 1.
pub(crate) fn failure_exit_code(err: &KardexError) -> i32 {
    match err {
        KardexError::Configuration(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_exit_with_2() {
        let err = KardexError::Configuration("missing file".to_string());
        assert_eq!(failure_exit_code(&err), 2);
    }

    #[test]
    fn test_domain_errors_exit_with_1() {
        let err = KardexError::DuplicateKey("123".to_string());
        assert_eq!(failure_exit_code(&err), 1);
        let err = KardexError::Io("unreadable".to_string());
        assert_eq!(failure_exit_code(&err), 1);
    }
}
