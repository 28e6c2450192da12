//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

const CONFIG_TEMPLATE: &str = r#"# Kardex configuration

# Register backend: "memory" (nothing survives the process) or "sled"
backend = "sled"

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[storage]
# Directory holding the sled database (required for the sled backend)
path = "data/register"

[csv]
# Field delimiter for import/export, a single ASCII character
delimiter = ";"

[logging]
# Enable JSON file logging in addition to the console
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(default_value = "kardex.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.path.exists() && !self.force {
            println!(
                "❌ {} already exists, pass --force to overwrite",
                self.path.display()
            );
            return Ok(1);
        }

        fs::write(&self.path, CONFIG_TEMPLATE)?;
        println!("✅ Wrote starter configuration to {}", self.path.display());
        println!("   Edit it, then run `kardex validate-config` to check it");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_parseable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kardex.toml");
        let args = InitArgs {
            path: path.clone(),
            force: false,
        };

        let code = args.execute().unwrap();

        assert_eq!(code, 0);
        let config = crate::config::load_config(&path).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kardex.toml");
        fs::write(&path, "backend = \"memory\"\n").unwrap();

        let args = InitArgs {
            path: path.clone(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "backend = \"memory\"\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kardex.toml");
        fs::write(&path, "backend = \"memory\"\n").unwrap();

        let args = InitArgs {
            path: path.clone(),
            force: true,
        };

        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[storage]"));
    }
}
