//! # Record types
//!
//! Typed records returned by a [`CompoundClient`](crate::CompoundClient).
//!
//! Every field is optional: a key absent from the source deserializes to
//! `None`, and the proxy reports it as [`Error::MissingField`](crate::Error)
//! only when that particular field is read.
//! The error names the accessor that was called, so a standard InChI missing
//! from basic info reads `stdinchi` while the extended one reads `inchi`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// BASIC INFO
// =============================================================================

/// Basic compound info: SMILES plus the standard InChI identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    /// Standard InChI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,
    /// Standard InChIKey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inchikey: Option<String>,
}

impl CompoundInfo {
    /// Record carrying only a SMILES string.
    pub fn with_smiles(smiles: impl Into<String>) -> Self {
        Self {
            smiles: Some(smiles.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// EXTENDED INFO
// =============================================================================

/// Extended compound info: formula, masses, logP estimates and common name.
///
/// Numeric values are passed through as the client reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedCompoundInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_formula: Option<String>,
    /// Non-standard InChI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,
    /// Non-standard InChIKey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inchikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monoisotopic_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_mass: Option<f64>,
    /// Calculated AlogP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alogp: Option<f64>,
    /// Calculated XlogP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xlogp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

// =============================================================================
// STRUCTURE FILES
// =============================================================================

/// Coordinate dimension requested for a MOL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// `true` when 3D coordinates must be calculated server-side.
    #[must_use]
    pub fn calc3d(self) -> bool {
        matches!(self, Self::Three)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two => f.write_str("2d"),
            Self::Three => f.write_str("3d"),
        }
    }
}

// =============================================================================
// FIELD VALUES
// =============================================================================

/// A single field read by name, see [`Compound::field`](crate::Compound::field).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}
