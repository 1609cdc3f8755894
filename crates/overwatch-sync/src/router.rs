//! Broadcast router: resolve a targeting mode to viewports, then to live
//! communicators.
//!
//! Resolution is a pure function of the mode and the layout so it can be
//! tested without any renderer. Only the second stage touches the registry.

use std::sync::Arc;

use overwatch_core::models::RelevantMaps;
use overwatch_imagery::{Communicator, CommunicatorRegistry};

/// Resolve which viewport ids a mode selects, in layout order.
///
/// When `active_id` is not part of `map_ids`, `Others` excludes nothing and
/// `Active` selects nothing.
pub fn resolve_targets(
    mode: RelevantMaps,
    map_ids: &[String],
    active_id: Option<&str>,
) -> Vec<String> {
    match mode {
        RelevantMaps::All => map_ids.to_vec(),
        RelevantMaps::Others => {
            map_ids.iter().filter(|id| Some(id.as_str()) != active_id).cloned().collect()
        }
        RelevantMaps::Active => {
            map_ids.iter().filter(|id| Some(id.as_str()) == active_id).take(1).cloned().collect()
        }
    }
}

/// Resolved targets of one broadcast and the communicators mounted for them
pub struct Route {
    pub targets: Vec<String>,
    /// Mounted targets, in target order
    pub mounted: Vec<(String, Arc<dyn Communicator>)>,
}

impl Route {
    /// Targets with no live communicator, in target order
    pub fn unmounted(&self) -> Vec<String> {
        self.targets
            .iter()
            .filter(|id| !self.mounted.iter().any(|(mounted, _)| mounted == *id))
            .cloned()
            .collect()
    }
}

/// Fans operations out to mounted communicators
#[derive(Debug, Clone)]
pub struct BroadcastRouter {
    registry: CommunicatorRegistry,
}

impl BroadcastRouter {
    pub fn new(registry: CommunicatorRegistry) -> Self {
        Self { registry }
    }

    /// Resolve targets and look up their communicators
    pub fn route(&self, mode: RelevantMaps, map_ids: &[String], active_id: Option<&str>) -> Route {
        let targets = resolve_targets(mode, map_ids, active_id);
        let mounted = targets
            .iter()
            .filter_map(|id| self.registry.provide(id).map(|communicator| (id.clone(), communicator)))
            .collect();

        Route { targets, mounted }
    }
}
