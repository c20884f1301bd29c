use crate::error::{AbookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for abook, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// File name of the saved address book, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Page size used by `show` when none is given on the command line
    #[serde(default)]
    pub page_size: Option<usize>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            page_size: None,
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(AbookError::Store("config: data_file cannot be empty".into()));
        }
        if self.page_size == Some(0) {
            return Err(AbookError::Store("config: page_size must be at least 1".into()));
        }
        Ok(())
    }
}
