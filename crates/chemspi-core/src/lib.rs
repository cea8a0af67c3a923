//! # chemspi-core
//!
//! Lazily fetched, memoized ChemSpider compound records.
//!
//! A [`Compound`] is created from a ChemSpider ID and a shared
//! [`CompoundClient`]. Nothing is requested up front; every attribute group
//! is fetched on first read and kept for the lifetime of the compound.
//!
//! ```rust,ignore
//! use chemspi_core::Compound;
//! use std::sync::Arc;
//!
//! let client = Arc::new(MyClient::connect(token)?);
//! let ethanol = Compound::new(client, "682")?;
//! println!("{}", ethanol.smiles()?);        // fetches basic info
//! println!("{}", ethanol.stdinchikey()?);   // served from cache
//! println!("{}", ethanol.image_url());      // no fetch at all
//! ```
//!
//! ## Layout
//!
//! - [`csid`]: identifiers and their parsing
//! - [`record`]: typed records returned by clients
//! - [`client`]: the client contract
//! - [`cache`]: write-once slots and statistics
//! - [`compound`]: the lazy proxy
//! - [`preview`]: inline image capability for display hosts

pub mod cache;
pub mod client;
pub mod compound;
pub mod csid;
pub mod error;
pub mod preview;
pub mod record;

pub use cache::{CacheStats, Slot};
pub use client::{CompoundClient, DEFAULT_IMAGE_HOST};
pub use compound::{Compound, FIELD_NAMES};
pub use csid::{Csid, IntoCsid};
pub use error::{Error, Result};
pub use preview::{Previewable, preview_data_uri};
pub use record::{CompoundInfo, Dimension, ExtendedCompoundInfo, FieldValue};
