//! Overwatch Core - Case model, action vocabulary, and configuration
//!
//! This crate contains the domain types shared by every other overwatch crate:
//! the persisted Case snapshot, viewport settings, the annotation model, and the
//! `Action` enum that carries every state mutation through the system.

pub mod actions;
pub mod config;
pub mod error;
pub mod models;

pub use actions::Action;
pub use error::{OverwatchError, Result};
