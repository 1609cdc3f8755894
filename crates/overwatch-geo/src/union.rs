//! Planar polygon union behind a narrow, swappable contract.

use std::panic::{self, AssertUnwindSafe};

use geo::{BooleanOps, MultiPolygon, Polygon};

use crate::error::GeometryError;

/// Result of a union: either one polygon or several disjoint ones
#[derive(Debug, Clone, PartialEq)]
pub enum UnionOutcome {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl UnionOutcome {
    /// Wrap the outcome as a multi-polygon, promoting a single polygon
    pub fn into_multi_polygon(self) -> MultiPolygon<f64> {
        match self {
            UnionOutcome::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
            UnionOutcome::MultiPolygon(multi) => multi,
        }
    }
}

/// A planar polygon-union engine.
///
/// Implementations must report failure through [`GeometryError`] and never
/// unwind past this boundary.
pub trait PolygonUnion: Send + Sync {
    fn union(&self, polygons: &[Polygon<f64>]) -> Result<UnionOutcome, GeometryError>;
}

/// Union backed by `geo`'s boolean operations
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanOpsUnion;

impl PolygonUnion for BooleanOpsUnion {
    fn union(&self, polygons: &[Polygon<f64>]) -> Result<UnionOutcome, GeometryError> {
        if polygons.is_empty() {
            return Err(GeometryError::InvalidInput { reason: "No polygons to union".to_string() });
        }

        let merged = panic::catch_unwind(AssertUnwindSafe(|| {
            polygons.iter().fold(MultiPolygon::new(vec![]), |acc, polygon| {
                acc.union(&MultiPolygon::new(vec![polygon.clone()]))
            })
        }))
        .map_err(|payload| GeometryError::UnionFailed { reason: panic_message(payload) })?;

        match merged.0.len() {
            0 => Err(GeometryError::EmptyResult),
            1 => Ok(UnionOutcome::Polygon(merged.0.into_iter().next().ok_or(GeometryError::EmptyResult)?)),
            _ => Ok(UnionOutcome::MultiPolygon(merged)),
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "union engine panicked".to_string()
    }
}
