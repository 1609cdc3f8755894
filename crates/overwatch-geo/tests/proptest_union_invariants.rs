//! Property-based invariant tests for the polygon union engine.
//!
//! 1. Union never panics and never shrinks coverage.
//! 2. Union is idempotent (A ∪ A = A).
//! 3. Union of disjoint inputs has the summed area.
//! 4. Mercator projection roundtrips within tolerance.

use geo::Area;
use overwatch_geo::models::{from_geo_multi_polygon, to_geo_polygon, Geometry};
use overwatch_geo::spatial::{area, covers, topologically_equal};
use overwatch_geo::transform::{lon_lat_to_mercator, mercator_to_lon_lat};
use overwatch_geo::{BooleanOpsUnion, PolygonUnion};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Geometry> {
    (-100i32..100, -80i32..80, 1i32..40, 1i32..40).prop_map(|(x, y, w, h)| {
        Geometry::rectangle(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
    })
}

fn union_of(geometries: &[Geometry]) -> Geometry {
    let polygons: Vec<_> = geometries.iter().map(|g| to_geo_polygon(&g.polygons()[0])).collect();
    let outcome = BooleanOpsUnion.union(&polygons).unwrap();
    from_geo_multi_polygon(&outcome.into_multi_polygon())
}

proptest! {
    #[test]
    fn union_covers_every_input(a in rect_strategy(), b in rect_strategy()) {
        let merged = union_of(&[a.clone(), b.clone()]);

        prop_assert!(covers(&merged, &a, 1e-6));
        prop_assert!(covers(&merged, &b, 1e-6));
        prop_assert!(area(&merged) <= area(&a) + area(&b) + 1e-6);
    }
}

proptest! {
    #[test]
    fn union_idempotent(a in rect_strategy()) {
        let merged = union_of(&[a.clone(), a.clone()]);
        prop_assert!(topologically_equal(&merged, &a, 1e-6));
    }
}

proptest! {
    #[test]
    fn disjoint_union_sums_area(a in rect_strategy(), dx in 200i32..400) {
        let b = match &a {
            Geometry::Polygon { coordinates } => Geometry::polygon(vec![coordinates[0]
                .iter()
                .map(|c| [c[0] + dx as f64, c[1]])
                .collect()]),
            _ => unreachable!(),
        };
        let merged = union_of(&[a.clone(), b.clone()]);
        let polygon_area: f64 = to_geo_polygon(&a.polygons()[0]).unsigned_area();

        prop_assert!((area(&merged) - 2.0 * polygon_area).abs() < 1e-6);
    }
}

proptest! {
    #[test]
    fn mercator_roundtrip(lon in -180.0f64..180.0, lat in -85.0f64..85.0) {
        let back = mercator_to_lon_lat(lon_lat_to_mercator([lon, lat]));
        prop_assert!((back[0] - lon).abs() < 1e-7);
        prop_assert!((back[1] - lat).abs() < 1e-7);
    }
}
