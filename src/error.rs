//! Memory validator error types

use thiserror::Error;

/// Memory validator error type
///
/// Only orchestration failures surface here. Unreadable memory documents and
/// unresolved references are ordinary outcomes and never become an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid extraction or noise pattern
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for memory validator operations
pub type Result<T> = std::result::Result<T, Error>;
