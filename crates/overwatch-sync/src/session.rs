//! The session dispatch loop.
//!
//! A [`Session`] owns the application state and runs every action through
//! two stages: the reducers, then the effects. Actions produced by effects
//! are queued FIFO and processed in the same `dispatch` call until the queue
//! drains. Everything runs on the caller's task; renderer round trips are the
//! only suspension points.

use std::collections::VecDeque;

use overwatch_core::config::LayeredConfig;
use overwatch_core::models::{AnnotationAgentOperation, Case, Crs, ImageProcParam, MapData};
use overwatch_core::Action;
use overwatch_geo::{BooleanOpsUnion, PolygonUnion};
use overwatch_imagery::CommunicatorRegistry;

use crate::annotations::{
    append_drawn_feature, auto_show, AnnotationSynchronizer, EntityMapper, FeatureCollectionMapper,
};
use crate::image_processing::is_map_image_process_active;
use crate::overlay_status::{toggle_translate, OverlayStatusEffects};
use crate::restore::restore;
use crate::router::BroadcastRouter;
use crate::scanned_area::ScannedAreaAccumulator;
use crate::state::AppState;

pub const ANNOTATION_FAILED_TOAST: &str = "Failed to update annotations";

/// One open workbench session
pub struct Session<U: PolygonUnion = BooleanOpsUnion> {
    state: AppState,
    registry: CommunicatorRegistry,
    synchronizer: AnnotationSynchronizer,
    accumulator: ScannedAreaAccumulator<U>,
    overlay_status: OverlayStatusEffects,
    mapper: Box<dyn EntityMapper>,
    image_proc_params: Vec<ImageProcParam>,
    queue: VecDeque<Action>,
}

impl Session<BooleanOpsUnion> {
    pub fn new(registry: CommunicatorRegistry, config: &LayeredConfig) -> Self {
        Self::with_union(registry, config, BooleanOpsUnion)
    }
}

impl<U: PolygonUnion> Session<U> {
    /// Create a session whose scanned areas are merged by `union`
    pub fn with_union(registry: CommunicatorRegistry, config: &LayeredConfig, union: U) -> Self {
        let accumulator = ScannedAreaAccumulator::with_union(
            union,
            Crs::from_epsg(config.scanned_area_crs.value),
            config.geometry_validity.value,
        );

        Self {
            state: AppState::default(),
            synchronizer: AnnotationSynchronizer::new(BroadcastRouter::new(registry.clone())),
            overlay_status: OverlayStatusEffects::new(registry.clone(), config),
            registry,
            accumulator,
            mapper: Box::new(FeatureCollectionMapper),
            image_proc_params: config.image_proc_params.value.clone(),
            queue: VecDeque::new(),
        }
    }

    /// Replace the annotation entity mapper
    pub fn with_mapper(mut self, mapper: impl EntityMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn registry(&self) -> &CommunicatorRegistry {
        &self.registry
    }

    /// Process `action` and everything it triggers.
    ///
    /// Returns every processed action in processing order, `action` first.
    pub async fn dispatch(&mut self, action: Action) -> Vec<Action> {
        self.queue.push_back(action);
        let mut processed = Vec::new();

        while let Some(action) = self.queue.pop_front() {
            tracing::debug!(action = action.kind(), "Dispatching action");
            self.reduce(&action);

            let back_to_world = match &action {
                Action::BackToWorldView { map_id } => {
                    self.overlay_status.prepare_back_to_world(map_id, &self.state.maps)
                }
                _ => None,
            };
            let mut produced = self.effects(&action).await;
            processed.push(action);

            // The overlay is cleared before the renderer round trip starts
            if let Some(back_to_world) = back_to_world {
                let clear = back_to_world.clear_overlay().clone();
                tracing::debug!(action = clear.kind(), "Dispatching action");
                self.reduce(&clear);
                produced.extend(self.effects(&clear).await);
                processed.push(clear);
                produced.extend(back_to_world.reload().await);
            }

            self.queue.extend(produced);
        }

        processed
    }

    fn reduce(&mut self, action: &Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Open `case`, restoring every feature area from its snapshot
    pub async fn open_case(&mut self, case: Case, no_initial_search: Option<bool>) -> Vec<Action> {
        self.dispatch(Action::SelectCase { case: Box::new(case), no_initial_search }).await
    }

    /// Whether the viewport's imagery currently needs a processing layer
    pub fn is_image_processing_active(&self, map_id: &str) -> bool {
        self.state
            .maps
            .map(map_id)
            .is_some_and(|map| is_map_image_process_active(&map.data, &self.image_proc_params))
    }

    async fn effects(&self, action: &Action) -> Vec<Action> {
        let state = &self.state;

        match action {
            Action::SelectCase { case, no_initial_search } => {
                tracing::info!(case_id = %case.id, case_name = %case.name, "Restoring case");
                restore(case, *no_initial_search)
            }
            Action::SelectCaseSuccess(case) => {
                tracing::info!(
                    case_id = %case.id,
                    maps = state.maps.maps_list.len(),
                    "Case restored"
                );
                Vec::new()
            }
            Action::ActivateScannedArea => self
                .accumulator
                .activate(
                    state.maps.active_map(),
                    &state.overlay_status.overlays_scanned_area_data,
                )
                .into_iter()
                .collect(),
            Action::SetAnnotationsLayer(_) => {
                vec![auto_show(state.layers.display_annotations_layer)]
            }
            Action::AnnotationVisualizerAgent(operation) => {
                let entities = if operation.operation == AnnotationAgentOperation::Show {
                    self.mapper.entities(&state.layers.annotations_layer)
                } else {
                    Vec::new()
                };

                let report = self
                    .synchronizer
                    .apply(
                        operation,
                        &state.maps.ids(),
                        state.maps.active_map_id.as_deref(),
                        &entities,
                    )
                    .await;

                if report.failed.is_empty() {
                    Vec::new()
                } else {
                    vec![Action::warning_toast(ANNOTATION_FAILED_TOAST)]
                }
            }
            Action::AnnotationDrawEnd(feature) => {
                vec![append_drawn_feature(&state.layers.annotations_layer, feature.clone())]
            }
            Action::ActiveMapChanged(_) => vec![Action::reset_annotation_mode()],
            Action::ToggleDraggedMode { map_id, overlay_id, dragged } => {
                toggle_translate(map_id, overlay_id, *dragged, &state.maps)
            }
            Action::SetAutoImageProcessingSuccess(enabled) => state
                .maps
                .active_map()
                .map(|map| Action::UpdateMap {
                    id: map.id.clone(),
                    data: MapData { is_auto_image_processing_active: *enabled, ..map.data.clone() },
                })
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}
