//! Tool flags and image-processing parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Boolean switches owned by the tools feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolsFlag {
    GeoRegisteredOptionsEnabled,
    ShadowMouse,
    ShadowMouseDisabled,
    ShadowMouseActiveForManyScreens,
    PinLocation,
    AutoImageProcessing,
    ImageProcessingDisabled,
    IsMeasureToolActive,
    HideMeasure,
}

/// Immutable flag table.
///
/// Every update returns a new table; the receiver is never mutated, so
/// previous states stay valid for replay and comparison. Unset flags read
/// as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolsFlags(BTreeMap<ToolsFlag, bool>);

impl ToolsFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: ToolsFlag) -> bool {
        self.0.get(&flag).copied().unwrap_or(false)
    }

    /// Whether the flag was ever written, as opposed to defaulting to `false`
    pub fn is_set(&self, flag: ToolsFlag) -> bool {
        self.0.contains_key(&flag)
    }

    pub fn with_flag(&self, flag: ToolsFlag, value: bool) -> Self {
        let mut next = self.0.clone();
        next.insert(flag, value);
        Self(next)
    }

    pub fn with_flags<I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (ToolsFlag, bool)>,
    {
        let mut next = self.0.clone();
        next.extend(updates);
        Self(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToolsFlag, bool)> + '_ {
        self.0.iter().map(|(flag, value)| (*flag, *value))
    }
}

impl FromIterator<(ToolsFlag, bool)> for ToolsFlags {
    fn from_iter<I: IntoIterator<Item = (ToolsFlag, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Manual image-processing arguments keyed by parameter name (e.g. `Contrast`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageManualProcessArgs(pub BTreeMap<String, f64>);

impl ImageManualProcessArgs {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }
}

/// Manual image-processing arguments keyed by overlay id
pub type OverlaysManualProcessArgs = BTreeMap<String, ImageManualProcessArgs>;

/// A configurable image-processing parameter and its neutral value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProcParam {
    pub name: String,
    pub default_value: f64,
    pub min: f64,
    pub max: f64,
}

impl ImageProcParam {
    pub fn new(name: impl Into<String>, default_value: f64, min: f64, max: f64) -> Self {
        Self { name: name.into(), default_value, min, max }
    }

    /// The stock parameter set: Brightness, Contrast, Gamma, Saturation, Sharpness
    pub fn defaults() -> Vec<ImageProcParam> {
        vec![
            ImageProcParam::new("Brightness", 0.0, -100.0, 100.0),
            ImageProcParam::new("Contrast", 0.0, -100.0, 100.0),
            ImageProcParam::new("Gamma", 100.0, 1.0, 200.0),
            ImageProcParam::new("Saturation", 100.0, 1.0, 100.0),
            ImageProcParam::new("Sharpness", 0.0, 0.0, 100.0),
        ]
    }
}
