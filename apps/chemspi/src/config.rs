//! CLI configuration.
//!
//! Values come from an optional JSON file and are then overridden by
//! command-line arguments or their environment variables.

use chemspi_core::{DEFAULT_IMAGE_HOST, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemspiConfig {
    /// Root of the record directory (see [`RecordDir`](crate::record_dir::RecordDir)).
    pub records_dir: PathBuf,
    /// Host interpolated into image URLs.
    pub image_host: String,
}

impl Default for ChemspiConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("."),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
        }
    }
}

impl ChemspiConfig {
    /// Load from a JSON file. Keys absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Apply overrides; `None` keeps the current value.
    #[must_use]
    pub fn merged(mut self, records_dir: Option<PathBuf>, image_host: Option<String>) -> Self {
        if let Some(dir) = records_dir {
            self.records_dir = dir;
        }
        if let Some(host) = image_host {
            self.image_host = host;
        }
        self
    }
}
