//! Error types for the habit_core library.
//!
//! The calculators themselves never fail; these errors come from the
//! surrounding IO (config, journal) and from user input validation.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for habit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data file parsed as JSON but has the wrong shape
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// Mood journal error
    #[error("Journal error: {0}")]
    Journal(String),

    /// Rejected user input (unknown mood, bad weekday, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
