//! Annotation model: draw modes, broadcast operations, and visualizer entities.

use geojson::Feature;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OverwatchError;

/// Interactive drawing mode of the annotation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationMode {
    Point,
    LineString,
    Polygon,
    Circle,
    Rectangle,
    Arrow,
    Translate,
}

/// Which viewports receive a broadcast operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevantMaps {
    /// Every viewport in the layout
    All,
    /// Every viewport except the active one
    Others,
    /// Only the active viewport
    Active,
}

impl fmt::Display for RelevantMaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelevantMaps::All => "all",
            RelevantMaps::Others => "others",
            RelevantMaps::Active => "active",
        };
        f.write_str(name)
    }
}

impl FromStr for RelevantMaps {
    type Err = OverwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RelevantMaps::All),
            "others" => Ok(RelevantMaps::Others),
            "active" => Ok(RelevantMaps::Active),
            _ => Err(OverwatchError::ConfigInvalid {
                key: "relevant_maps".to_string(),
                reason: format!("Invalid targeting mode: {}. Use all, others, or active", s),
            }),
        }
    }
}

/// Operation applied to each target's annotation visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationAgentOperation {
    Show,
    Hide,
    ToggleDrawInteraction,
    ChangeLine,
    ChangeStrokeColor,
    ChangeFillColor,
    /// Any operation name this build does not know; applied as a no-op
    #[serde(other)]
    Unknown,
}

/// A routed request against the annotation visualizers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationOperation {
    pub operation: AnnotationAgentOperation,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub mode: Option<AnnotationMode>,
    pub relevant_maps: RelevantMaps,
}

impl AnnotationOperation {
    pub fn new(operation: AnnotationAgentOperation, relevant_maps: RelevantMaps) -> Self {
        Self { operation, value: None, mode: None, relevant_maps }
    }

    pub fn show(relevant_maps: RelevantMaps) -> Self {
        Self::new(AnnotationAgentOperation::Show, relevant_maps)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_mode(mut self, mode: AnnotationMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// A feature handed to a visualizer, keyed by a stable id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerEntity {
    pub id: String,
    pub feature_json: Feature,
}

/// Annotation drawing style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VisualizerStyle {
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
    pub stroke_dasharray: f64,
    pub stroke: String,
    pub fill: String,
}

impl Default for VisualizerStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            fill_opacity: 0.4,
            stroke_opacity: 1.0,
            stroke_dasharray: 0.0,
            stroke: "#27b2cf".to_string(),
            fill: "#ffffff".to_string(),
        }
    }
}

/// Partial style update; `None` fields keep their current value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StylePatch {
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub stroke_dasharray: Option<f64>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
}

impl VisualizerStyle {
    pub fn merged(&self, patch: &StylePatch) -> Self {
        Self {
            stroke_width: patch.stroke_width.unwrap_or(self.stroke_width),
            fill_opacity: patch.fill_opacity.unwrap_or(self.fill_opacity),
            stroke_opacity: patch.stroke_opacity.unwrap_or(self.stroke_opacity),
            stroke_dasharray: patch.stroke_dasharray.unwrap_or(self.stroke_dasharray),
            stroke: patch.stroke.clone().unwrap_or_else(|| self.stroke.clone()),
            fill: patch.fill.clone().unwrap_or_else(|| self.fill.clone()),
        }
    }
}
