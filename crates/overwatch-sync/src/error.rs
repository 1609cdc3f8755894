use overwatch_core::models::GeometryType;
use overwatch_core::OverwatchError;
use overwatch_geo::GeometryError;
use thiserror::Error;

/// Why an extent could not be merged into a scanned area
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScannedAreaError {
    #[error("Extent must be a Polygon or MultiPolygon, found {0:?}")]
    NotAreal(GeometryType),

    #[error("Cannot bring extent from EPSG:{from} into EPSG:{to}")]
    Projection { from: u32, to: u32 },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl From<ScannedAreaError> for OverwatchError {
    fn from(err: ScannedAreaError) -> Self {
        match err {
            ScannedAreaError::NotAreal(found) => OverwatchError::InvalidGeometry {
                context: "extent".to_string(),
                reason: format!("expected Polygon, found {:?}", found),
            },
            ScannedAreaError::Projection { from, to } => OverwatchError::CrsMismatch {
                expected: format!("EPSG:{}", to),
                found: format!("EPSG:{}", from),
            },
            ScannedAreaError::Geometry(err) => err.into(),
        }
    }
}
