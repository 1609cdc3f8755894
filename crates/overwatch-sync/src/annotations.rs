//! Annotation operation fan-out and the rules derived from the persisted
//! annotations layer.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection};
use overwatch_core::models::{
    AnnotationAgentOperation, AnnotationOperation, RelevantMaps, VisualizerEntity,
};
use overwatch_core::{Action, Result};
use overwatch_imagery::AnnotationVisualizer;

use crate::router::BroadcastRouter;

/// Derives visualizer entities from the persisted annotations layer
pub trait EntityMapper: Send + Sync {
    fn entities(&self, layer: &FeatureCollection) -> Vec<VisualizerEntity>;
}

/// Maps each feature to one entity.
///
/// The entity id comes from the feature id, then an `id` property, then a
/// fresh v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureCollectionMapper;

impl EntityMapper for FeatureCollectionMapper {
    fn entities(&self, layer: &FeatureCollection) -> Vec<VisualizerEntity> {
        layer
            .features
            .iter()
            .map(|feature| VisualizerEntity { id: entity_id(feature), feature_json: feature.clone() })
            .collect()
    }
}

fn entity_id(feature: &Feature) -> String {
    match &feature.id {
        Some(Id::String(id)) => return id.clone(),
        Some(Id::Number(id)) => return id.to_string(),
        None => {}
    }
    match feature.property("id") {
        Some(serde_json::Value::String(id)) => id.clone(),
        Some(serde_json::Value::Number(id)) => id.to_string(),
        _ => uuid::Uuid::new_v4().to_string(),
    }
}

/// Outcome of one fan-out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Ids the targeting mode selected, in layout order
    pub targeted: Vec<String>,
    pub applied: Vec<String>,
    /// Targets with no mounted communicator
    pub unmounted: Vec<String>,
    /// Mounted targets whose renderer has no annotation visualizer
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Applies annotation operations to the viewports a targeting mode selects
#[derive(Debug, Clone)]
pub struct AnnotationSynchronizer {
    router: BroadcastRouter,
}

impl AnnotationSynchronizer {
    pub fn new(router: BroadcastRouter) -> Self {
        Self { router }
    }

    /// Fan `operation` out to its targets.
    ///
    /// `entities` is only read by `show`. A failing target never stops the
    /// fan-out to the remaining ones.
    pub async fn apply(
        &self,
        operation: &AnnotationOperation,
        map_ids: &[String],
        active_id: Option<&str>,
        entities: &[VisualizerEntity],
    ) -> SyncReport {
        let route = self.router.route(operation.relevant_maps, map_ids, active_id);
        let mut report = SyncReport {
            unmounted: route.unmounted(),
            targeted: route.targets,
            ..Default::default()
        };

        if operation.operation == AnnotationAgentOperation::Unknown {
            tracing::warn!(relevant_maps = %operation.relevant_maps, "Skipping unknown annotation operation");
            return report;
        }

        for (id, communicator) in route.mounted {
            let Some(visualizer) = communicator.annotation_visualizer() else {
                tracing::debug!(map_id = %id, "Renderer has no annotation visualizer");
                report.skipped.push(id);
                continue;
            };

            match apply_one(visualizer.as_ref(), operation, entities).await {
                Ok(true) => report.applied.push(id),
                Ok(false) => {
                    tracing::warn!(
                        map_id = %id,
                        operation = ?operation.operation,
                        "Skipping annotation operation without a value"
                    );
                    report.skipped.push(id);
                }
                Err(err) => {
                    tracing::warn!(map_id = %id, error = %err, "Annotation operation failed");
                    report.failed.push((id, err.to_string()));
                }
            }
        }

        report
    }
}

async fn apply_one(
    visualizer: &dyn AnnotationVisualizer,
    operation: &AnnotationOperation,
    entities: &[VisualizerEntity],
) -> Result<bool> {
    let value = operation.value.as_deref();
    match (operation.operation, value) {
        (AnnotationAgentOperation::Show, _) => visualizer.show(entities).await?,
        (AnnotationAgentOperation::Hide, _) => visualizer.hide().await?,
        (AnnotationAgentOperation::ToggleDrawInteraction, _) => {
            visualizer.toggle_draw_interaction(operation.mode).await?
        }
        (AnnotationAgentOperation::ChangeLine, Some(value)) => visualizer.change_line(value).await?,
        (AnnotationAgentOperation::ChangeStrokeColor, Some(value)) => {
            visualizer.change_stroke(value).await?
        }
        (AnnotationAgentOperation::ChangeFillColor, Some(value)) => {
            visualizer.change_fill(value).await?
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// The operation emitted whenever the persisted annotations layer changes
pub fn auto_show(display_annotations_layer: bool) -> Action {
    let relevant_maps =
        if display_annotations_layer { RelevantMaps::All } else { RelevantMaps::Active };
    Action::AnnotationVisualizerAgent(AnnotationOperation::show(relevant_maps))
}

/// Append a freshly drawn feature to the annotations layer
pub fn append_drawn_feature(layer: &FeatureCollection, feature: Feature) -> Action {
    let mut next = layer.clone();
    next.features.push(feature);
    Action::SetAnnotationsLayer(next)
}
