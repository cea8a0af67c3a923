//! # Client contract
//!
//! [`CompoundClient`] is the seam between the proxy and whatever actually
//! talks to ChemSpider. Transport, authentication and response decoding all
//! live behind it; the proxy only decides *when* to call it.

use crate::{CompoundInfo, Csid, Dimension, ExtendedCompoundInfo, Result};

/// Host used in image URLs unless a client says otherwise.
pub const DEFAULT_IMAGE_HOST: &str = "www.chemspider.com";

/// Source of compound records.
///
/// Errors returned here reach the caller of the proxy unchanged.
pub trait CompoundClient {
    fn fetch_basic_info(&self, csid: Csid) -> Result<CompoundInfo>;

    fn fetch_extended_info(&self, csid: Csid) -> Result<ExtendedCompoundInfo>;

    /// MOL file text with 2D or 3D coordinates.
    fn fetch_structure_file(&self, csid: Csid, dimension: Dimension) -> Result<String>;

    /// PNG depiction of the 2D structure.
    fn fetch_thumbnail(&self, csid: Csid) -> Result<Vec<u8>>;

    /// Host interpolated into [`Compound::image_url`](crate::Compound::image_url).
    fn image_host(&self) -> &str {
        DEFAULT_IMAGE_HOST
    }
}
