//! Error types for the catalog client.
//!
//! # Design
//! Every failure surfaces to the immediate caller with its kind plus the
//! original status or message, so retry decisions can be made outside the
//! core. Nothing here is retried or swallowed.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors returned by `CatalogClient` and `Catalog` operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A decoded record carried an id below 1.
    #[error("work ids must be positive integers, got {0}")]
    InvalidIdentifier(i64),

    /// The service answered with a `detail` message instead of a payload.
    #[error("catalog rejected the request: {0}")]
    RemoteRejection(String),

    /// The service returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The work does not offer the requested content format.
    #[error("work {id} has no {format} format")]
    FormatUnavailable { id: u64, format: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response.
    #[error("connection failed: {0}")]
    Connection(String),
}

impl CatalogError {
    /// HTTP status carried by a `Transport` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
