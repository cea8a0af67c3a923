//! # chemspi Library
//!
//! This library exposes the chemspi CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod record_dir;

// Re-export chemspi_core for convenience
pub use chemspi_core;
