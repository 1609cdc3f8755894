use async_trait::async_trait;
use overwatch_core::error::Result;
use overwatch_core::models::{AnnotationMode, MapPosition, VisualizerEntity};
use std::sync::Arc;

/// Port for a live renderer bound to one viewport
#[async_trait]
pub trait Communicator: Send + Sync {
    /// Viewport identifier this communicator is bound to
    fn id(&self) -> &str;

    /// Renderer type currently driving the viewport (e.g. `openLayersMap`)
    fn active_map_name(&self) -> String;

    /// Switch the viewport to another renderer type, keeping the camera position
    async fn set_active_map(&self, map_type: &str, position: Option<&MapPosition>) -> Result<()>;

    /// Reload the renderer's default imagery source
    async fn load_initial_map_source(&self, position: Option<&MapPosition>) -> Result<()>;

    /// Attach a layer by id
    async fn add_layer(&self, layer_id: &str) -> Result<()>;

    /// Detach a layer by id
    async fn remove_layer(&self, layer_id: &str) -> Result<()>;

    /// The annotation sub-plugin, if the renderer has one
    fn annotation_visualizer(&self) -> Option<Arc<dyn AnnotationVisualizer>>;
}

/// Port for the per-viewport annotation sub-plugin
#[async_trait]
pub trait AnnotationVisualizer: Send + Sync {
    /// Enable a draw interaction, or disable drawing with `None`
    async fn toggle_draw_interaction(&self, mode: Option<AnnotationMode>) -> Result<()>;

    /// Change the stroke dash style
    async fn change_line(&self, value: &str) -> Result<()>;

    async fn change_stroke(&self, value: &str) -> Result<()>;

    async fn change_fill(&self, value: &str) -> Result<()>;

    async fn clear_entities(&self) -> Result<()>;

    async fn set_entities(&self, entities: &[VisualizerEntity]) -> Result<()>;

    /// Replace the displayed entities
    async fn show(&self, entities: &[VisualizerEntity]) -> Result<()> {
        self.clear_entities().await?;
        self.set_entities(entities).await
    }

    async fn hide(&self) -> Result<()> {
        self.clear_entities().await
    }
}
