//! Error types for the storage and configuration layers.
//!
//! Nothing in the core treats these as fatal: load failures degrade to an
//! empty collection and save failures leave the in-memory state
//! authoritative. Invalid input (blank text) and unknown ids are silent
//! no-ops at the store boundary, not errors.

use thiserror::Error;

/// Errors surfaced by the taskflow core.
#[derive(Debug, Error)]
pub enum Error {
    /// Durable storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The task collection could not be encoded for storage.
    #[error("task data error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A file could not be read or created.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for taskflow operations.
pub type Result<T> = std::result::Result<T, Error>;
