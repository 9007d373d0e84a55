//! Error types for simkit_objects

use std::io;
use thiserror::Error;

/// Errors raised while loading specs or tuning files
///
/// Object construction and per-tick updates never fail; only the loading
/// surfaces return these.
#[derive(Error, Debug)]
pub enum SimError {
    /// IO error when reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON object spec
    #[error("spec parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML tuning file
    #[error("tuning parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for simkit_objects operations
pub type Result<T> = std::result::Result<T, SimError>;
