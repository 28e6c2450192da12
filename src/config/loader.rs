//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{KardexConfig, RegisterBackend, StorageConfig};
use crate::domain::errors::KardexError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`KardexConfig`]
/// 4. Applies environment variable overrides (`KARDEX_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`KardexError::Configuration`] if the file cannot be read, the
/// TOML does not parse, a referenced environment variable is unset, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use kardex::config::loader::load_config;
///
/// let config = load_config("kardex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<KardexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(KardexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        KardexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: KardexConfig = toml::from_str(&contents)
        .map_err(|e| KardexError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        KardexError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched.
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is
/// not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(KardexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `KARDEX_*` prefix
///
/// Variables follow the pattern `KARDEX_<SECTION>_<KEY>`, for example
/// `KARDEX_STORAGE_PATH` or `KARDEX_APPLICATION_LOG_LEVEL`. Values that do
/// not parse are ignored, leaving the file value in place.
fn apply_env_overrides(config: &mut KardexConfig) {
    if let Ok(val) = std::env::var("KARDEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("KARDEX_BACKEND") {
        match val.to_lowercase().as_str() {
            "memory" => config.backend = RegisterBackend::Memory,
            "sled" => config.backend = RegisterBackend::Sled,
            _ => {}
        }
    }

    if let Ok(val) = std::env::var("KARDEX_STORAGE_PATH") {
        match config.storage {
            Some(ref mut storage) => storage.path = val,
            None => config.storage = Some(StorageConfig { path: val }),
        }
    }

    if let Ok(val) = std::env::var("KARDEX_CSV_DELIMITER") {
        config.csv.delimiter = val;
    }

    if let Ok(val) = std::env::var("KARDEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("KARDEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("KARDEX_TEST_VAR", "test_value");
        let input = "path = \"${KARDEX_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"test_value\"\n");
        std::env::remove_var("KARDEX_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("KARDEX_MISSING_VAR");
        let input = "path = \"${KARDEX_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("KARDEX_COMMENTED_VAR");
        let input = "# path = \"${KARDEX_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(KardexError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
backend = "sled"

[application]
log_level = "debug"

[storage]
path = "data/register"

[csv]
delimiter = ";"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.backend, RegisterBackend::Sled);
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.storage.unwrap().path, "data/register");
    }

    #[test]
    fn test_load_config_invalid_fails_validation() {
        let toml_content = "backend = \"sled\"\n";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(KardexError::Configuration(_))));
    }
}
