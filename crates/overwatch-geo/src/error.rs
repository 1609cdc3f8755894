use overwatch_core::OverwatchError;
use thiserror::Error;

/// Failure of a geometric computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid geometry: {reason}")]
    InvalidInput { reason: String },

    #[error("Union engine failed: {reason}")]
    UnionFailed { reason: String },

    #[error("Union produced an empty geometry")]
    EmptyResult,

    #[error("No projection from EPSG:{from} to EPSG:{to}")]
    UnsupportedProjection { from: u32, to: u32 },
}

impl From<GeometryError> for OverwatchError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidInput { reason } => {
                OverwatchError::InvalidGeometry { context: "union input".to_string(), reason }
            }
            GeometryError::UnsupportedProjection { from, to } => OverwatchError::CrsMismatch {
                expected: format!("EPSG:{}", to),
                found: format!("EPSG:{}", from),
            },
            other => OverwatchError::UnionFailed { reason: other.to_string() },
        }
    }
}
