//! Error types for the msdf-core library

use thiserror::Error;

/// Main error type for rasterization operations
#[derive(Error, Debug)]
pub enum MsdfError {
    #[error("Pixmap size mismatch: expected {expected} elements for {width}x{height}, got {actual}")]
    PixmapSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Invalid shape: {message}")]
    ShapeError { message: String },
}

impl MsdfError {
    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new shape error
    pub fn shape_error(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type MsdfResult<T> = Result<T, MsdfError>;
