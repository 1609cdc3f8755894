//! Overwatch Sync - Multi-viewport synchronization and coverage tracking
//!
//! This crate drives a set of viewports from one application state: it
//! restores persisted cases as ordered action streams, fans annotation
//! operations out to live renderers, and accumulates the area each overlay
//! has been scanned over.

pub mod annotations;
pub mod error;
pub mod image_processing;
pub mod overlay_status;
pub mod restore;
pub mod router;
pub mod scanned_area;
pub mod session;
pub mod state;

pub use annotations::{AnnotationSynchronizer, EntityMapper, FeatureCollectionMapper, SyncReport};
pub use error::ScannedAreaError;
pub use overlay_status::OverlayStatusEffects;
pub use restore::{restore, RESTORE_MUTATION_COUNT};
pub use router::{resolve_targets, BroadcastRouter, Route};
pub use scanned_area::ScannedAreaAccumulator;
pub use session::Session;
pub use state::AppState;
