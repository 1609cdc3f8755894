//! Overlay-status effects: returning a viewport to the world view and
//! propagating translate mode across viewports showing the same overlay.

use std::sync::Arc;

use overwatch_core::config::LayeredConfig;
use overwatch_core::models::{AnnotationMode, MapData, MapPosition};
use overwatch_core::Action;
use overwatch_imagery::{Communicator, CommunicatorRegistry};

use crate::state::MapsState;

pub const BACK_TO_WORLD_FAILED_TOAST: &str = "Failed to load map";

/// Effects for overlay-status intents
#[derive(Debug, Clone)]
pub struct OverlayStatusEffects {
    registry: CommunicatorRegistry,
    config: LayeredConfig,
}

impl OverlayStatusEffects {
    pub fn new(registry: CommunicatorRegistry, config: &LayeredConfig) -> Self {
        Self { registry, config: config.clone() }
    }

    /// Start returning `map_id` to the world view.
    ///
    /// Returns `None` when the viewport is unknown or not mounted. The
    /// returned handle carries the overlay-clearing update, available before
    /// any renderer call is made.
    pub fn prepare_back_to_world(&self, map_id: &str, maps: &MapsState) -> Option<BackToWorld> {
        let Some(map) = maps.map(map_id) else {
            tracing::debug!(map_id = %map_id, "Back to world for unknown viewport");
            return None;
        };
        let communicator = self.registry.provide(map_id)?;

        let renderer = communicator.active_map_name();
        let switch_to = self
            .config
            .is_disabled_map_type(&renderer)
            .then(|| self.config.world_view_map_type.value.clone());

        Some(BackToWorld {
            map_id: map_id.to_string(),
            clear_overlay: Action::UpdateMap {
                id: communicator.id().to_string(),
                data: MapData {
                    overlay: None,
                    is_auto_image_processing_active: false,
                    ..map.data.clone()
                },
            },
            position: map.data.position.clone(),
            communicator,
            switch_to,
            renderer,
        })
    }
}

/// A viewport on its way back to the world view
pub struct BackToWorld {
    map_id: String,
    clear_overlay: Action,
    communicator: Arc<dyn Communicator>,
    position: Option<MapPosition>,
    /// Renderer to switch to, when the current one cannot show the world
    switch_to: Option<String>,
    renderer: String,
}

impl BackToWorld {
    /// Drops the overlay and turns off auto image processing
    pub fn clear_overlay(&self) -> &Action {
        &self.clear_overlay
    }

    /// Reload world imagery and report the outcome
    pub async fn reload(self) -> Vec<Action> {
        let result = match &self.switch_to {
            Some(map_type) => {
                self.communicator.set_active_map(map_type, self.position.as_ref()).await
            }
            None => self.communicator.load_initial_map_source(self.position.as_ref()).await,
        };

        match result {
            Ok(()) => vec![Action::BackToWorldSuccess { map_id: self.map_id }],
            Err(err) => {
                tracing::warn!(
                    map_id = %self.map_id,
                    renderer = %self.renderer,
                    error = %err,
                    "Failed to return viewport to world view"
                );
                vec![
                    Action::warning_toast(BACK_TO_WORLD_FAILED_TOAST),
                    Action::BackToWorldFailed { map_id: self.map_id, error: err.to_string() },
                ]
            }
        }
    }
}

/// Put every viewport showing `overlay_id` into or out of translate mode.
///
/// Other viewports come first, in layout order; the originating viewport is
/// always last.
pub fn toggle_translate(
    map_id: &str,
    overlay_id: &str,
    dragged: bool,
    maps: &MapsState,
) -> Vec<Action> {
    let annotation_mode = dragged.then_some(AnnotationMode::Translate);

    maps.maps_list
        .iter()
        .filter(|map| map.id != map_id && map.overlay_id() == Some(overlay_id))
        .map(|map| map.id.as_str())
        .chain(std::iter::once(map_id))
        .map(|id| Action::SetAnnotationMode { annotation_mode, map_id: Some(id.to_string()) })
        .collect()
}
