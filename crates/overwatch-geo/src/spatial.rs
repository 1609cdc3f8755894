use geo::algorithm::bounding_rect::BoundingRect;
use geo::{Area, BooleanOps, Rect};

use crate::models::{to_geo_multi_polygon, Geometry};

/// Planar area of an areal geometry in squared CRS units
pub fn area(geometry: &Geometry) -> f64 {
    to_geo_multi_polygon(geometry).unsigned_area()
}

/// Area of the symmetric difference between two areal geometries
pub fn difference_area(a: &Geometry, b: &Geometry) -> f64 {
    let a = to_geo_multi_polygon(a);
    let b = to_geo_multi_polygon(b);
    a.xor(&b).unsigned_area()
}

/// Whether two areal geometries cover the same region, within `tolerance`
pub fn topologically_equal(a: &Geometry, b: &Geometry, tolerance: f64) -> bool {
    difference_area(a, b) <= tolerance
}

/// Whether `outer` covers every point of `inner`, within `tolerance`
pub fn covers(outer: &Geometry, inner: &Geometry, tolerance: f64) -> bool {
    let outer = to_geo_multi_polygon(outer);
    let inner = to_geo_multi_polygon(inner);
    inner.difference(&outer).unsigned_area() <= tolerance
}

/// Bounding box of an areal geometry as `[min_x, min_y, max_x, max_y]`
pub fn bounding_box(geometry: &Geometry) -> Option<[f64; 4]> {
    let rect: Rect<f64> = to_geo_multi_polygon(geometry).bounding_rect()?;
    Some([rect.min().x, rect.min().y, rect.max().x, rect.max().y])
}
