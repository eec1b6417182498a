use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Delay between a keystroke and the pipeline rerun.
    pub debounce_ms: u64,
}

impl Settings {
    /// Load settings from environment variables.
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("BARBACK_DATA_DIR")
            .unwrap_or_else(|_| "./data/store".to_string())
            .into();

        let debounce_ms = std::env::var("BARBACK_DEBOUNCE_MS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid BARBACK_DEBOUNCE_MS value".to_string()))?;

        Ok(Settings {
            storage: StorageConfig { data_dir },
            browse: BrowseConfig { debounce_ms },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(Error::Config("Data directory must not be empty".to_string()));
        }

        if self.browse.debounce_ms > 5_000 {
            return Err(Error::Config(
                "Debounce above 5000ms makes typing unusable".to_string(),
            ));
        }

        Ok(())
    }
}
