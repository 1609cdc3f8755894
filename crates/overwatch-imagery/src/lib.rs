//! Overwatch Imagery - Renderer-boundary ports and the communicator registry
//!
//! This crate defines the ports a rendering backend implements and the
//! registry that maps viewport identifiers to their live communicators.

pub mod memory;
pub mod ports;
pub mod registry;

pub use ports::{AnnotationVisualizer, Communicator};
pub use registry::CommunicatorRegistry;
