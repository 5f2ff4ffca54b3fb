//! Error types for the coachie_core library.
//!
//! The score engine and the voice parser never fail; these errors come from
//! the persistence and configuration layers around them.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for coachie_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Log store or score history error
    #[error("Store error: {0}")]
    Store(String),

    /// A transcript could not be turned into a loggable entry
    #[error("Could not understand command: {0}")]
    Unrecognized(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
