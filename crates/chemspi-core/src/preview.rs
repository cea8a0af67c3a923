//! # Preview Capability
//!
//! Rich-display hosts (notebooks, GUIs, terminals with image support) can ask
//! any [`Previewable`] value for an inline image instead of guessing from
//! naming conventions.

use crate::{Compound, CompoundClient, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A value that can render itself as an inline image.
pub trait Previewable {
    /// MIME type of [`Previewable::preview`].
    fn preview_mime(&self) -> &'static str;

    /// Image bytes for inline display.
    fn preview(&self) -> Result<&[u8]>;
}

/// Compounds preview as their 2D depiction; this reads the same cached
/// thumbnail as [`Compound::image`].
impl<C: CompoundClient + ?Sized> Previewable for Compound<C> {
    fn preview_mime(&self) -> &'static str {
        "image/png"
    }

    fn preview(&self) -> Result<&[u8]> {
        self.image()
    }
}

/// Render a preview as a `data:` URI.
pub fn preview_data_uri(item: &(impl Previewable + ?Sized)) -> Result<String> {
    let bytes = item.preview()?;
    Ok(format!(
        "data:{};base64,{}",
        item.preview_mime(),
        STANDARD.encode(bytes)
    ))
}
