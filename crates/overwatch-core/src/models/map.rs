use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::geometry::{Crs, Geometry};
use super::overlay::Overlay;
use super::tools::ImageManualProcessArgs;

/// Camera position of a viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPosition {
    /// Polygon describing the currently visible ground extent
    pub extent_polygon: Geometry,

    /// CRS the extent is expressed in
    #[serde(default)]
    pub crs: Crs,

    /// Renderer-specific camera state, opaque to the engine
    #[serde(default)]
    pub projected_state: Option<serde_json::Value>,
}

impl MapPosition {
    pub fn new(extent_polygon: Geometry) -> Self {
        Self { extent_polygon, crs: Crs::wgs84(), projected_state: None }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = crs;
        self
    }
}

/// Renderer backend and imagery source assigned to a viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldView {
    pub map_type: String,
    #[serde(default)]
    pub source_type: String,
}

impl Default for WorldView {
    fn default() -> Self {
        Self { map_type: "openLayersMap".to_string(), source_type: String::new() }
    }
}

/// Mutable per-viewport data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapData {
    pub position: Option<MapPosition>,
    pub overlay: Option<Overlay>,
    pub is_auto_image_processing_active: bool,
    pub image_manual_process_args: Option<ImageManualProcessArgs>,
}

/// One rendering slot in the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// Unique within a session
    pub id: String,

    #[serde(default)]
    pub world_view: WorldView,

    #[serde(default)]
    pub data: MapData,

    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl MapSettings {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            world_view: WorldView::default(),
            data: MapData::default(),
            flags: BTreeMap::new(),
        }
    }

    pub fn with_map_type(mut self, map_type: impl Into<String>) -> Self {
        self.world_view.map_type = map_type.into();
        self
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.data.overlay = Some(overlay);
        self
    }

    pub fn with_position(mut self, position: MapPosition) -> Self {
        self.data.position = Some(position);
        self
    }

    /// Id of the overlay currently displayed, if any
    pub fn overlay_id(&self) -> Option<&str> {
        self.data.overlay.as_ref().map(|overlay| overlay.id.as_str())
    }
}
