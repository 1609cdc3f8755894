//! Integration tests for scanned-area accumulation inside a session
//!
//! This test suite verifies that:
//! - Successive extents grow the stored area and never shrink it
//! - A failing union keeps the last good value and produces no action
//! - Extents in another projection are normalized before union

use overwatch_core::config::LayeredConfig;
use overwatch_core::models::{
    Crs, Geometry, MapPosition, MapSettings, Overlay, ValidityMode,
};
use overwatch_core::Action;
use overwatch_geo::spatial::{area, covers};
use overwatch_geo::transform::lon_lat_to_mercator;
use overwatch_geo::{GeometryError, PolygonUnion, UnionOutcome};
use overwatch_imagery::CommunicatorRegistry;
use overwatch_sync::{ScannedAreaAccumulator, ScannedAreaError, Session};

struct FailingUnion;

impl PolygonUnion for FailingUnion {
    fn union(&self, _: &[geo::Polygon<f64>]) -> Result<UnionOutcome, GeometryError> {
        Err(GeometryError::UnionFailed { reason: "degenerate ring".to_string() })
    }
}

fn viewport(extent: Geometry) -> MapSettings {
    MapSettings::new("m1")
        .with_overlay(Overlay::new("o1"))
        .with_position(MapPosition::new(extent))
}

async fn pan_to<U: PolygonUnion>(session: &mut Session<U>, extent: Geometry) -> Vec<Action> {
    let data = viewport(extent).data;
    session.dispatch(Action::UpdateMap { id: "m1".to_string(), data }).await;
    session.dispatch(Action::ActivateScannedArea).await
}

async fn started<U: PolygonUnion>(mut session: Session<U>) -> Session<U> {
    session
        .dispatch(Action::SetMapsData {
            maps_list: vec![viewport(Geometry::rectangle(0.0, 0.0, 1.0, 1.0))],
        })
        .await;
    session.dispatch(Action::SetActiveMapId("m1".to_string())).await;
    session
}

fn stored<U: PolygonUnion>(session: &Session<U>) -> Option<Geometry> {
    session.state().overlay_status.overlays_scanned_area_data.get("o1").cloned()
}

#[tokio::test]
async fn test_scanned_area_grows_monotonically() {
    let session = Session::new(CommunicatorRegistry::default(), &LayeredConfig::with_defaults());
    let mut session = started(session).await;

    session.dispatch(Action::ActivateScannedArea).await;
    let first = stored(&session).unwrap();

    pan_to(&mut session, Geometry::rectangle(0.5, 0.0, 1.5, 1.0)).await;
    let second = stored(&session).unwrap();

    pan_to(&mut session, Geometry::rectangle(5.0, 5.0, 6.0, 6.0)).await;
    let third = stored(&session).unwrap();

    assert!(covers(&second, &first, 1e-9));
    assert!(covers(&third, &second, 1e-9));
    assert!((area(&second) - 1.5).abs() < 1e-9);
    assert!((area(&third) - 2.5).abs() < 1e-9);
    assert_eq!(third.polygons().len(), 2);
}

#[tokio::test]
async fn test_failed_union_keeps_last_good_value() {
    let session = Session::with_union(
        CommunicatorRegistry::default(),
        &LayeredConfig::with_defaults(),
        FailingUnion,
    );
    let mut session = started(session).await;

    // The first extent needs no union.
    session.dispatch(Action::ActivateScannedArea).await;
    let before = stored(&session).unwrap();

    let processed = pan_to(&mut session, Geometry::rectangle(0.5, 0.5, 2.0, 2.0)).await;

    assert_eq!(processed, vec![Action::ActivateScannedArea]);
    assert_eq!(stored(&session), Some(before));
}

#[tokio::test]
async fn test_missing_position_is_silent() {
    let mut session =
        Session::new(CommunicatorRegistry::default(), &LayeredConfig::with_defaults());
    let map = MapSettings::new("m1").with_overlay(Overlay::new("o1"));
    session.dispatch(Action::SetMapsData { maps_list: vec![map] }).await;
    session.dispatch(Action::SetActiveMapId("m1".to_string())).await;

    let processed = session.dispatch(Action::ActivateScannedArea).await;

    assert_eq!(processed.len(), 1);
    assert!(stored(&session).is_none());
}

#[test]
fn test_mercator_extent_is_normalized() {
    let accumulator = ScannedAreaAccumulator::new(Crs::wgs84(), ValidityMode::Lenient);
    let [min_x, min_y] = lon_lat_to_mercator([10.0, 10.0]);
    let [max_x, max_y] = lon_lat_to_mercator([11.0, 11.0]);
    let extent = Geometry::rectangle(min_x, min_y, max_x, max_y);

    let result =
        accumulator.accumulate("o1", None, &extent, &Crs::web_mercator()).unwrap();

    let polygon = &result.polygons()[0][0];
    assert!(polygon
        .iter()
        .all(|&[x, y]| (9.999..=11.001).contains(&x) && (9.999..=11.001).contains(&y)));
}

#[test]
fn test_unknown_projection_is_rejected() {
    let accumulator = ScannedAreaAccumulator::new(Crs::wgs84(), ValidityMode::Lenient);
    let existing = Geometry::rectangle(0.0, 0.0, 1.0, 1.0).to_multi_polygon().unwrap();

    let err = accumulator
        .accumulate(
            "o1",
            Some(&existing),
            &Geometry::rectangle(500000.0, 0.0, 510000.0, 10000.0),
            &Crs::from_epsg(32636),
        )
        .unwrap_err();

    assert_eq!(err, ScannedAreaError::Projection { from: 32636, to: 4326 });
}
