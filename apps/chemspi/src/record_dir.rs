//! # Record Directory Client
//!
//! A [`CompoundClient`] that serves previously saved records from disk.
//!
//! Layout, one directory per ChemSpider ID:
//!
//! ```text
//! <root>/
//!   682/
//!     info.json        basic info (CompoundInfo)
//!     extended.json    extended info (ExtendedCompoundInfo)
//!     2d.mol           MOL file, 2D coordinates
//!     3d.mol           MOL file, 3D coordinates
//!     thumbnail.png    2D depiction
//! ```

use chemspi_core::{
    CompoundClient, CompoundInfo, Csid, DEFAULT_IMAGE_HOST, Dimension, Error,
    ExtendedCompoundInfo, Result,
};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const INFO_FILE: &str = "info.json";
pub const EXTENDED_FILE: &str = "extended.json";
pub const MOL_2D_FILE: &str = "2d.mol";
pub const MOL_3D_FILE: &str = "3d.mol";
pub const THUMBNAIL_FILE: &str = "thumbnail.png";

/// Directory-backed compound client.
#[derive(Debug, Clone)]
pub struct RecordDir {
    root: PathBuf,
    image_host: String,
}

impl RecordDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
        }
    }

    /// Override the host used for image URLs.
    #[must_use]
    pub fn with_image_host(mut self, host: impl Into<String>) -> Self {
        self.image_host = host.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of one artifact of one record.
    pub fn path_for(&self, csid: Csid, file: &str) -> PathBuf {
        self.root.join(csid.to_string()).join(file)
    }

    fn read(&self, csid: Csid, file: &str) -> Result<Vec<u8>> {
        let path = self.path_for(csid, file);
        debug!(path = %path.display(), "reading record file");
        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
            _ => Error::Io(e),
        })
    }

    fn read_text(&self, csid: Csid, file: &str) -> Result<String> {
        let bytes = self.read(csid, file)?;
        String::from_utf8(bytes).map_err(Error::client)
    }
}

impl CompoundClient for RecordDir {
    fn fetch_basic_info(&self, csid: Csid) -> Result<CompoundInfo> {
        Ok(serde_json::from_slice(&self.read(csid, INFO_FILE)?)?)
    }

    fn fetch_extended_info(&self, csid: Csid) -> Result<ExtendedCompoundInfo> {
        Ok(serde_json::from_slice(&self.read(csid, EXTENDED_FILE)?)?)
    }

    fn fetch_structure_file(&self, csid: Csid, dimension: Dimension) -> Result<String> {
        let file = match dimension {
            Dimension::Two => MOL_2D_FILE,
            Dimension::Three => MOL_3D_FILE,
        };
        self.read_text(csid, file)
    }

    fn fetch_thumbnail(&self, csid: Csid) -> Result<Vec<u8>> {
        self.read(csid, THUMBNAIL_FILE)
    }

    fn image_host(&self) -> &str {
        &self.image_host
    }
}
