//! Overwatch Geo - Geometry validation, CRS normalization, and polygon union
//!
//! This crate holds every computational-geometry concern of the engine. The
//! scanned-area accumulator in `overwatch-sync` depends only on the
//! [`union::PolygonUnion`] contract defined here.

pub mod error;
pub mod models;
pub mod spatial;
pub mod transform;
pub mod union;
pub mod validation;

pub use error::GeometryError;
pub use union::{BooleanOpsUnion, PolygonUnion, UnionOutcome};
