//! Error types for persistence and template loading.
//!
//! Canvas interaction itself is infallible; errors only come from reading
//! or parsing files at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving editor settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform configuration directory is available
    #[error("No configuration directory available")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while reading label templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two items in one template share an id
    #[error("Duplicate item id: {0}")]
    DuplicateItemId(String),

    /// Label dimensions must be positive and finite
    #[error("Invalid label size: {width}x{height}mm")]
    InvalidSize { width: f32, height: f32 },
}

/// Result type alias for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
