//! Error types for the uc-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit '{unit}' is not part of the {category} category")]
    UnitNotInCategory { unit: String, category: String },

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(#[from] uc_core::UnitError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for uc-app operations.
pub type AppResult<T> = Result<T, AppError>;
