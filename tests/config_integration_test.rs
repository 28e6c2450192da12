//! Integration tests for configuration loading

use kardex::adapters::register::create_register;
use kardex::config::{load_config, RegisterBackend};
use kardex::domain::KardexError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_config_loads_and_opens_backend() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("kardex.toml");
    let storage_path = dir.path().join("register");

    fs::write(
        &config_path,
        format!(
            r#"
backend = "sled"

[application]
log_level = "warn"

[storage]
path = "{}"

[csv]
delimiter = ","

[logging]
local_enabled = false
"#,
            storage_path.display()
        ),
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.backend, RegisterBackend::Sled);
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.csv.delimiter_byte(), b',');

    let mut register = create_register(&config).unwrap();
    assert_eq!(register.count().unwrap(), 0);
    register.close().unwrap();
}

#[test]
fn test_minimal_memory_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("kardex.toml");
    fs::write(&config_path, "backend = \"memory\"\n").unwrap();

    let config = load_config(&config_path).unwrap();

    assert_eq!(config.backend, RegisterBackend::Memory);
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.csv.delimiter, ";");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_in_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("kardex.toml");
    let storage_path = dir.path().join("register");

    std::env::set_var("KARDEX_IT_STORAGE", storage_path.to_str().unwrap());
    fs::write(
        &config_path,
        "backend = \"sled\"\n\n[storage]\npath = \"${KARDEX_IT_STORAGE}\"\n",
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    std::env::remove_var("KARDEX_IT_STORAGE");

    assert_eq!(
        config.storage.unwrap().path,
        storage_path.to_str().unwrap()
    );
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let result = load_config("definitely/not/a/real/kardex.toml");
    assert!(matches!(result, Err(KardexError::Configuration(_))));
}

#[test]
fn test_sled_backend_without_storage_section_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("kardex.toml");
    fs::write(&config_path, "backend = \"sled\"\n").unwrap();

    let result = load_config(&config_path);

    match result {
        Err(KardexError::Configuration(message)) => {
            assert!(message.contains("storage"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}
