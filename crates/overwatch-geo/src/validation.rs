use geo::Area;

use crate::error::GeometryError;
use crate::models::{to_geo_polygon, Geometry, PolygonCoords, Ring, ValidityMode};

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    fn merge(&mut self, prefix: &str, other: ValidationResult) {
        for error in other.errors {
            self.add_error(format!("{}.{}", prefix, error.location), error.reason);
        }
    }

    fn first_reason(&self) -> String {
        self.errors
            .first()
            .map(|e| format!("{}: {}", e.location, e.reason))
            .unwrap_or_else(|| "Invalid geometry".to_string())
    }
}

/// Validate an areal geometry as union input.
///
/// In lenient mode an open ring is accepted, since [`prepare_polygon`]
/// closes it before use.
pub fn validate_geometry(geometry: &Geometry, mode: ValidityMode) -> ValidationResult {
    let mut result = ValidationResult::valid();
    match geometry {
        Geometry::Polygon { coordinates } => {
            result.merge("Polygon", validate_polygon(coordinates, mode));
        }
        Geometry::MultiPolygon { coordinates } => {
            for (i, polygon) in coordinates.iter().enumerate() {
                result.merge(&format!("MultiPolygon[{}]", i), validate_polygon(polygon, mode));
            }
        }
        other => result.add_error(
            format!("{:?}", other.geometry_type()),
            "Expected Polygon or MultiPolygon".to_string(),
        ),
    }
    result
}

fn validate_polygon(coords: &PolygonCoords, mode: ValidityMode) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if coords.is_empty() {
        result.add_error("exterior".to_string(), "Polygon has no rings".to_string());
        return result;
    }

    for (i, ring) in coords.iter().enumerate() {
        let location = if i == 0 { "exterior".to_string() } else { format!("interior[{}]", i - 1) };
        validate_ring(ring, mode, &location, &mut result);
    }

    if result.is_valid && to_geo_polygon(&close_rings(coords)).unsigned_area() == 0.0 {
        result.add_error("exterior".to_string(), "Polygon has zero area".to_string());
    }

    result
}

fn validate_ring(ring: &Ring, mode: ValidityMode, location: &str, result: &mut ValidationResult) {
    for (i, coord) in ring.iter().enumerate() {
        if !coord[0].is_finite() || !coord[1].is_finite() {
            result.add_error(format!("{}[{}]", location, i), "Coordinates must be finite".to_string());
        }
    }

    let closed = is_closed(ring);
    let effective_len = if closed { ring.len() } else { ring.len() + 1 };

    if !closed && mode == ValidityMode::Strict {
        result.add_error(
            location.to_string(),
            "Ring must be closed (first point == last point)".to_string(),
        );
    }

    if effective_len < 4 {
        result.add_error(
            location.to_string(),
            format!("Ring must have at least 4 points, found {}", ring.len()),
        );
    }
}

fn is_closed(ring: &Ring) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

fn close_rings(coords: &PolygonCoords) -> PolygonCoords {
    coords
        .iter()
        .map(|ring| {
            let mut ring = ring.clone();
            if !is_closed(&ring) {
                if let Some(first) = ring.first().copied() {
                    ring.push(first);
                }
            }
            ring
        })
        .collect()
}

/// Validate polygon coordinates and return them ready for union
pub fn prepare_polygon(
    coords: &PolygonCoords,
    mode: ValidityMode,
) -> Result<PolygonCoords, GeometryError> {
    let validation = validate_polygon(coords, mode);
    if !validation.is_valid {
        return Err(GeometryError::InvalidInput { reason: validation.first_reason() });
    }
    Ok(close_rings(coords))
}
