//! Configuration management for ecodesign-comparator
//!
//! Config stored at: ~/.config/ecodesign-comparator/config.json

use ecodesign_domain::catalog::Catalog;
use ecodesign_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::load_catalog_with_override;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Currency label used in reports and exports
    #[serde(default = "default_currency")]
    pub currency: String,

    /// TOML catalog merged over the built-in prices and factors
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Project file used when a command gets none
    #[serde(default)]
    pub default_project: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            currency: default_currency(),
            catalog_path: None,
            default_project: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ecodesign-comparator");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Built-in catalog, with the configured override merged in
    pub fn catalog(&self) -> Result<Catalog> {
        load_catalog_with_override(self.catalog_path.as_deref())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Eco-design Comparator Configuration")?;
        writeln!(f, "===================================")?;
        writeln!(f)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Currency:        {}", self.currency)?;
        writeln!(
            f,
            "Catalog:         {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Default project: {}",
            self.default_project
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(illustrative values)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
