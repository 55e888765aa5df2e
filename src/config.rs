//! Application configuration
//!
//! Read from `{data_dir}/config.toml`. Every field is optional:
//! ```toml
//! catalog_path = "/home/me/words.json"
//! storage_key = "ebb_vocab_progress"
//! reconcile = "reset"        # or "additive"
//! distractor_count = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::DISTRACTOR_COUNT;
use crate::review::{ReconcileMode, PROGRESS_KEY};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word list to study; the bundled sample list when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Key of the progress slot
    pub storage_key: String,
    /// What to do with stored progress when the catalog size changes
    pub reconcile: ReconcileMode,
    /// Wrong options per quiz question
    pub distractor_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            storage_key: PROGRESS_KEY.to_string(),
            reconcile: ReconcileMode::default(),
            distractor_count: DISTRACTOR_COUNT,
        }
    }
}

impl AppConfig {
    /// Default data directory (e.g. ~/.local/share/vocab)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("vocab"))
            .ok_or(ConfigError::DataDirNotFound)
    }

    /// Load `config.toml` from a data directory, falling back to defaults
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
