//! Scanned-area accumulation.
//!
//! Each overlay owns a multi-polygon of everything the analyst has looked at.
//! A new viewport extent is unioned into it; a failed union leaves the stored
//! value untouched.

use overwatch_core::models::{
    Crs, Geometry, MapSettings, OverlaysScannedAreaData, PolygonCoords, ValidityMode,
};
use overwatch_core::Action;
use overwatch_geo::models::{from_geo_multi_polygon, to_geo_polygon};
use overwatch_geo::transform::normalize_geometry;
use overwatch_geo::validation::prepare_polygon;
use overwatch_geo::{BooleanOpsUnion, GeometryError, PolygonUnion};

use crate::error::ScannedAreaError;

/// Merges viewport extents into per-overlay scanned areas
#[derive(Debug, Clone)]
pub struct ScannedAreaAccumulator<U: PolygonUnion = BooleanOpsUnion> {
    union: U,
    crs: Crs,
    validity: ValidityMode,
}

impl ScannedAreaAccumulator<BooleanOpsUnion> {
    pub fn new(crs: Crs, validity: ValidityMode) -> Self {
        Self::with_union(BooleanOpsUnion, crs, validity)
    }
}

impl<U: PolygonUnion> ScannedAreaAccumulator<U> {
    /// Create an accumulator backed by a specific union engine
    pub fn with_union(union: U, crs: Crs, validity: ValidityMode) -> Self {
        Self { union, crs, validity }
    }

    /// CRS scanned areas are stored in
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Merge `extent` (expressed in `extent_crs`) into `existing`.
    ///
    /// With no existing area the extent is promoted to a multi-polygon as is.
    /// Otherwise the existing polygons and the extent are unioned; a single
    /// polygon result is re-wrapped as a one-element multi-polygon.
    pub fn accumulate(
        &self,
        overlay_id: &str,
        existing: Option<&Geometry>,
        extent: &Geometry,
        extent_crs: &Crs,
    ) -> Result<Geometry, ScannedAreaError> {
        let extent = normalize_geometry(extent, extent_crs, &self.crs).map_err(|err| match err {
            GeometryError::UnsupportedProjection { from, to } => {
                ScannedAreaError::Projection { from, to }
            }
            other => ScannedAreaError::Geometry(other),
        })?;

        let extent_polygons = extent.polygons();
        if extent_polygons.is_empty() {
            return Err(ScannedAreaError::NotAreal(extent.geometry_type()));
        }

        let prepared = extent_polygons
            .iter()
            .map(|polygon| prepare_polygon(polygon, self.validity))
            .collect::<Result<Vec<PolygonCoords>, GeometryError>>()?;

        let Some(existing) = existing else {
            tracing::debug!(overlay_id = %overlay_id, "Starting scanned area");
            return Ok(Geometry::multi_polygon(prepared));
        };

        let mut polygons: Vec<_> = existing.polygons().iter().map(to_geo_polygon).collect();
        polygons.extend(prepared.iter().map(to_geo_polygon));

        let outcome = self.union.union(&polygons)?;
        Ok(from_geo_multi_polygon(&outcome.into_multi_polygon()))
    }

    /// Record the active viewport's extent for its overlay.
    ///
    /// Returns `None` when the viewport has no position or no overlay, or
    /// when the merge fails. Failures are logged; the stored area is kept.
    pub fn activate(
        &self,
        active_map: Option<&MapSettings>,
        scanned_area_data: &OverlaysScannedAreaData,
    ) -> Option<Action> {
        let map = active_map?;
        let position = map.data.position.as_ref()?;
        let overlay = map.data.overlay.as_ref()?;

        match self.accumulate(
            &overlay.id,
            scanned_area_data.get(&overlay.id),
            &position.extent_polygon,
            &position.crs,
        ) {
            Ok(area) => Some(Action::SetOverlayScannedAreaData { id: overlay.id.clone(), area }),
            Err(err) => {
                tracing::error!(overlay_id = %overlay.id, error = %err, "failed to save scanned area");
                None
            }
        }
    }
}
