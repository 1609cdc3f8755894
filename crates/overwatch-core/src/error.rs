//! Error types for Overwatch

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverwatchError {
    // Geometry errors
    #[error("Invalid geometry in {context}: {reason}")]
    InvalidGeometry { context: String, reason: String },

    #[error("CRS mismatch: expected {expected}, found {found}")]
    CrsMismatch { expected: String, found: String },

    #[error("Polygon union failed: {reason}")]
    UnionFailed { reason: String },

    // Renderer errors
    #[error("Renderer for map {map_id} failed: {reason}")]
    RendererFailed { map_id: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for OverwatchError {
    fn from(err: serde_json::Error) -> Self {
        OverwatchError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OverwatchError>;
