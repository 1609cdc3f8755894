//! Conversions between the canonical geometry model and `geo` types.
//!
//! Case documents carry GeoJSON-shaped [`Geometry`] values; every
//! computation in this crate runs on `geo` polygons.

use geo::{Coord, LineString, MultiPolygon, Polygon};

pub use overwatch_core::models::{Crs, Geometry, GeometryType, PolygonCoords, Ring, ValidityMode};

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    LineString::new(ring.iter().map(|c| Coord { x: c[0], y: c[1] }).collect())
}

fn line_string_to_ring(line: &LineString<f64>) -> Ring {
    line.coords().map(|c| [c.x, c.y]).collect()
}

/// Convert polygon coordinates (exterior first, then holes) to a `geo::Polygon`
pub fn to_geo_polygon(coords: &PolygonCoords) -> Polygon<f64> {
    let mut rings = coords.iter().map(ring_to_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Polygon::new(exterior, rings.collect())
}

/// Convert a `geo::Polygon` back to canonical polygon coordinates
pub fn from_geo_polygon(polygon: &Polygon<f64>) -> PolygonCoords {
    let mut rings = Vec::with_capacity(polygon.interiors().len() + 1);
    rings.push(line_string_to_ring(polygon.exterior()));
    rings.extend(polygon.interiors().iter().map(line_string_to_ring));
    rings
}

/// Decompose an areal geometry into `geo` polygons.
///
/// Non-areal geometries yield an empty list.
pub fn to_geo_polygons(geometry: &Geometry) -> Vec<Polygon<f64>> {
    geometry.polygons().iter().map(to_geo_polygon).collect()
}

/// Convert a `geo::MultiPolygon` to a canonical `MultiPolygon` geometry
pub fn from_geo_multi_polygon(multi: &MultiPolygon<f64>) -> Geometry {
    Geometry::multi_polygon(multi.iter().map(from_geo_polygon).collect())
}

/// Convert an areal canonical geometry to a `geo::MultiPolygon`
pub fn to_geo_multi_polygon(geometry: &Geometry) -> MultiPolygon<f64> {
    MultiPolygon::new(to_geo_polygons(geometry))
}
