//! CRS checks and normalization
//!
//! Only the WGS 84 / Web Mercator pair is converted, using the spherical
//! mercator formulas. Every other mismatch is rejected rather than guessed.

use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::models::{Crs, Geometry};

/// WGS 84 semi-major axis in meters
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude beyond which Web Mercator is undefined
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Project a lon/lat pair to Web Mercator meters
pub fn lon_lat_to_mercator(coord: [f64; 2]) -> [f64; 2] {
    let lat = coord[1].clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let x = coord[0].to_radians() * EARTH_RADIUS;
    let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;
    [x, y]
}

/// Unproject Web Mercator meters to a lon/lat pair
pub fn mercator_to_lon_lat(coord: [f64; 2]) -> [f64; 2] {
    let lon = (coord[0] / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (coord[1] / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    [lon, lat]
}

fn map_coords(geometry: &Geometry, f: impl Fn([f64; 2]) -> [f64; 2]) -> Geometry {
    let ring = |r: &Vec<[f64; 2]>| r.iter().map(|c| f(*c)).collect::<Vec<_>>();
    match geometry {
        Geometry::Point { coordinates } => Geometry::Point { coordinates: f(*coordinates) },
        Geometry::LineString { coordinates } => {
            Geometry::LineString { coordinates: ring(coordinates) }
        }
        Geometry::Polygon { coordinates } => {
            Geometry::Polygon { coordinates: coordinates.iter().map(ring).collect() }
        }
        Geometry::MultiPoint { coordinates } => {
            Geometry::MultiPoint { coordinates: ring(coordinates) }
        }
        Geometry::MultiLineString { coordinates } => {
            Geometry::MultiLineString { coordinates: coordinates.iter().map(ring).collect() }
        }
        Geometry::MultiPolygon { coordinates } => Geometry::MultiPolygon {
            coordinates: coordinates.iter().map(|p| p.iter().map(ring).collect()).collect(),
        },
    }
}

/// Reproject a geometry into the target CRS
pub fn normalize_geometry(
    geometry: &Geometry,
    from_crs: &Crs,
    target_crs: &Crs,
) -> std::result::Result<Geometry, GeometryError> {
    match (from_crs.epsg, target_crs.epsg) {
        (from, to) if from == to => Ok(geometry.clone()),
        (4326, 3857) => Ok(map_coords(geometry, lon_lat_to_mercator)),
        (3857, 4326) => Ok(map_coords(geometry, mercator_to_lon_lat)),
        (from, to) => Err(GeometryError::UnsupportedProjection { from, to }),
    }
}
