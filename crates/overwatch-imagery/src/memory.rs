//! In-memory communicator for development and testing.
//!
//! Every call is recorded so tests can assert on exactly what a fan-out
//! did to each viewport.

use async_trait::async_trait;
use overwatch_core::error::{OverwatchError, Result};
use overwatch_core::models::{AnnotationMode, MapPosition, VisualizerEntity};
use std::sync::{Arc, RwLock};

use crate::ports::{AnnotationVisualizer, Communicator};

/// A renderer call observed by [`MemoryCommunicator`]
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    SetActiveMap { map_type: String, position: Option<MapPosition> },
    LoadInitialMapSource { position: Option<MapPosition> },
    AddLayer(String),
    RemoveLayer(String),
}

/// An annotation call observed by [`RecordingVisualizer`]
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizerCall {
    ToggleDrawInteraction(Option<AnnotationMode>),
    ChangeLine(String),
    ChangeStroke(String),
    ChangeFill(String),
    ClearEntities,
    SetEntities(Vec<VisualizerEntity>),
}

/// Annotation visualizer that records every call
#[derive(Debug, Default)]
pub struct RecordingVisualizer {
    calls: RwLock<Vec<VisualizerCall>>,
}

impl RecordingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<VisualizerCall> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: VisualizerCall) -> Result<()> {
        self.calls.write().unwrap_or_else(|e| e.into_inner()).push(call);
        Ok(())
    }
}

#[async_trait]
impl AnnotationVisualizer for RecordingVisualizer {
    async fn toggle_draw_interaction(&self, mode: Option<AnnotationMode>) -> Result<()> {
        self.record(VisualizerCall::ToggleDrawInteraction(mode))
    }

    async fn change_line(&self, value: &str) -> Result<()> {
        self.record(VisualizerCall::ChangeLine(value.to_string()))
    }

    async fn change_stroke(&self, value: &str) -> Result<()> {
        self.record(VisualizerCall::ChangeStroke(value.to_string()))
    }

    async fn change_fill(&self, value: &str) -> Result<()> {
        self.record(VisualizerCall::ChangeFill(value.to_string()))
    }

    async fn clear_entities(&self) -> Result<()> {
        self.record(VisualizerCall::ClearEntities)
    }

    async fn set_entities(&self, entities: &[VisualizerEntity]) -> Result<()> {
        self.record(VisualizerCall::SetEntities(entities.to_vec()))
    }
}

/// In-memory implementation of Communicator
#[derive(Debug)]
pub struct MemoryCommunicator {
    id: String,
    map_type: RwLock<String>,
    failure: Option<String>,
    visualizer: Option<Arc<RecordingVisualizer>>,
    calls: RwLock<Vec<RendererCall>>,
}

impl MemoryCommunicator {
    /// Create a communicator on the default 2-D renderer with an annotation visualizer
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            map_type: RwLock::new("openLayersMap".to_string()),
            failure: None,
            visualizer: Some(Arc::new(RecordingVisualizer::new())),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_map_type(self, map_type: impl Into<String>) -> Self {
        *self.map_type.write().unwrap_or_else(|e| e.into_inner()) = map_type.into();
        self
    }

    /// Make every renderer switch and source load fail with `reason`
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn without_visualizer(mut self) -> Self {
        self.visualizer = None;
        self
    }

    /// The recording visualizer, for assertions
    pub fn visualizer(&self) -> Option<Arc<RecordingVisualizer>> {
        self.visualizer.clone()
    }

    pub fn calls(&self) -> Vec<RendererCall> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: RendererCall) {
        self.calls.write().unwrap_or_else(|e| e.into_inner()).push(call);
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(OverwatchError::RendererFailed {
                map_id: self.id.clone(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Communicator for MemoryCommunicator {
    fn id(&self) -> &str {
        &self.id
    }

    fn active_map_name(&self) -> String {
        self.map_type.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    async fn set_active_map(&self, map_type: &str, position: Option<&MapPosition>) -> Result<()> {
        self.record(RendererCall::SetActiveMap {
            map_type: map_type.to_string(),
            position: position.cloned(),
        });
        self.check_failure()?;
        *self.map_type.write().unwrap_or_else(|e| e.into_inner()) = map_type.to_string();
        Ok(())
    }

    async fn load_initial_map_source(&self, position: Option<&MapPosition>) -> Result<()> {
        self.record(RendererCall::LoadInitialMapSource { position: position.cloned() });
        self.check_failure()
    }

    async fn add_layer(&self, layer_id: &str) -> Result<()> {
        self.record(RendererCall::AddLayer(layer_id.to_string()));
        Ok(())
    }

    async fn remove_layer(&self, layer_id: &str) -> Result<()> {
        self.record(RendererCall::RemoveLayer(layer_id.to_string()));
        Ok(())
    }

    fn annotation_visualizer(&self) -> Option<Arc<dyn AnnotationVisualizer>> {
        self.visualizer.clone().map(|v| v as Arc<dyn AnnotationVisualizer>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, Geometry, Value};

    fn entity(id: &str) -> VisualizerEntity {
        let feature = Feature {
            geometry: Some(Geometry::new(Value::Point(vec![1.0, 2.0]))),
            ..Default::default()
        };
        VisualizerEntity { id: id.to_string(), feature_json: feature }
    }

    #[tokio::test]
    async fn test_set_active_map_switches_renderer() {
        let communicator = MemoryCommunicator::new("m1").with_map_type("video");

        communicator.set_active_map("openLayersMap", None).await.unwrap();

        assert_eq!(communicator.active_map_name(), "openLayersMap");
        assert_eq!(
            communicator.calls(),
            vec![RendererCall::SetActiveMap { map_type: "openLayersMap".to_string(), position: None }]
        );
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_renderer_kept() {
        let communicator = MemoryCommunicator::new("m1").with_failure("tiles unavailable");

        let err = communicator.set_active_map("CesiumMap", None).await.unwrap_err();
        assert!(matches!(err, OverwatchError::RendererFailed { .. }));
        assert_eq!(communicator.active_map_name(), "openLayersMap");

        assert!(communicator.load_initial_map_source(None).await.is_err());
    }

    #[tokio::test]
    async fn test_default_show_clears_then_sets() {
        let visualizer = RecordingVisualizer::new();
        let entities = vec![entity("a")];

        visualizer.show(&entities).await.unwrap();
        visualizer.hide().await.unwrap();

        assert_eq!(
            visualizer.calls(),
            vec![
                VisualizerCall::ClearEntities,
                VisualizerCall::SetEntities(entities),
                VisualizerCall::ClearEntities,
            ]
        );
    }

    #[tokio::test]
    async fn test_layers_recorded() {
        let communicator = MemoryCommunicator::new("m1").without_visualizer();
        communicator.add_layer("roads").await.unwrap();
        communicator.remove_layer("roads").await.unwrap();

        assert!(communicator.annotation_visualizer().is_none());
        assert_eq!(
            communicator.calls(),
            vec![
                RendererCall::AddLayer("roads".to_string()),
                RendererCall::RemoveLayer("roads".to_string())
            ]
        );
    }
}
