use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::convert::TimeFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Which field a bare line in the interactive terminal edits.
    #[serde(default)]
    pub default_format: TimeFormat,
    /// Print the format examples block when the terminal starts.
    #[serde(default = "default_show_examples")]
    pub show_examples: bool,
}

fn default_show_examples() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { default_format: TimeFormat::Hour12, show_examples: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { display: DisplayConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "timeflip", "timeflip")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display.default_format, TimeFormat::Hour12);
        assert!(config.display.show_examples);
    }

    #[test]
    fn test_config_round_trips_through_toml() -> Result<()> {
        let config = Config {
            display: DisplayConfig { default_format: TimeFormat::Hour24, show_examples: false },
        };

        let serialized = toml::to_string_pretty(&config)?;
        assert!(serialized.contains("default_format = \"24\""));

        let parsed: Config = toml::from_str(&serialized)?;
        assert_eq!(parsed.display.default_format, TimeFormat::Hour24);
        assert!(!parsed.display.show_examples);
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_defaults() -> Result<()> {
        let parsed: Config = toml::from_str("[display]\ndefault_format = \"24\"\n")?;
        assert_eq!(parsed.display.default_format, TimeFormat::Hour24);
        assert!(parsed.display.show_examples);

        let parsed: Config = toml::from_str("")?;
        assert_eq!(parsed.display.default_format, TimeFormat::Hour12);
        Ok(())
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        // Create temporary directory
        let temp_dir = tempdir()?;

        // Set up temporary config directory
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        // Create and save config
        let config = Config {
            display: DisplayConfig { default_format: TimeFormat::Hour24, show_examples: false },
        };
        config.save()?;

        // Load config
        let loaded = Config::load()?;

        // Verify loaded config matches saved config
        assert_eq!(loaded.display.default_format, config.display.default_format);
        assert_eq!(loaded.display.show_examples, config.display.show_examples);

        Ok(())
    }
}
