//! Error type shared by the compound proxy and its clients.

use thiserror::Error;

/// Errors from chemspi.
///
/// The proxy itself only ever produces [`Error::InvalidCsid`],
/// [`Error::MissingField`] and [`Error::UnknownField`]. Every other variant
/// originates in a [`CompoundClient`](crate::CompoundClient) and is handed
/// back to the caller exactly as the client returned it.
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier cannot be parsed as an integer.
    #[error("Invalid ChemSpider ID: {0:?}")]
    InvalidCsid(String),

    /// A fetched record does not carry the requested field.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// No accessor exists under this name.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The client could not locate the record or artifact.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other client-side failure.
    #[error("Client error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an arbitrary client failure.
    pub fn client(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Client(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
