//! Configuration management for Kardex.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kardex::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("kardex.toml")?;
//!
//! println!("Backend: {:?}", config.backend);
//! if let Some(storage) = &config.storage {
//!     println!("Storage path: {}", storage.path);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! backend = "sled"
//!
//! [application]
//! log_level = "info"
//!
//! [storage]
//! path = "data/register"
//!
//! [csv]
//! delimiter = ";"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders in the file are substituted at load time, and
//! `KARDEX_*` variables override individual keys:
//!
//! ```bash
//! export KARDEX_BACKEND="memory"
//! export KARDEX_STORAGE_PATH="/var/lib/kardex"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CsvConfig, KardexConfig, LoggingConfig, RegisterBackend, StorageConfig,
};
