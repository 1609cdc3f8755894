use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::geometry::Geometry;

/// An imagery overlay that can be displayed in a viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// Unique identifier
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Acquisition time as reported by the source
    #[serde(default)]
    pub photo_time: Option<String>,

    #[serde(default)]
    pub sensor_name: Option<String>,

    #[serde(default)]
    pub source_type: Option<String>,

    /// Ground footprint
    #[serde(default)]
    pub footprint: Option<Geometry>,

    /// Source-specific fields carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Overlay {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            photo_time: None,
            sensor_name: None,
            source_type: None,
            footprint: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Drag offset applied to an overlay in translate mode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationData {
    pub dragged: bool,
    pub offset: [f64; 2],
}

/// Overlays attached to the case outside of the search results, keyed by slot
pub type MiscOverlays = BTreeMap<String, Option<Overlay>>;

/// Translation metadata keyed by overlay id
pub type OverlaysTranslationData = BTreeMap<String, TranslationData>;

/// Scanned-area multi-polygons keyed by overlay id
pub type OverlaysScannedAreaData = BTreeMap<String, Geometry>;
