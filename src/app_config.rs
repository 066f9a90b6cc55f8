use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::locale::LocaleTable;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings. The locale table lives
/// here so word ceilings and section order can be changed without a rebuild.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory exported documents are written to (defaults to the input's directory)
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Formatting rules and layout constants for both locales
    #[serde(default)]
    pub locales: LocaleTable,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.locales
            .validate()
            .context("Invalid locale settings")?;

        if let Some(output_dir) = &self.output_dir {
            if output_dir.trim().is_empty() {
                return Err(anyhow!("Output directory must not be blank when set"));
            }
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &json)
    }

    /// Load a configuration file, writing the default one when it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config
            .save(path)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;
        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: None,
            locales: LocaleTable::default(),
            log_level: LogLevel::default(),
        }
    }
}
