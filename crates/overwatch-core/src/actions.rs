//! The action vocabulary.
//!
//! Every state mutation in the workbench is expressed as an [`Action`].
//! Restoration, effects, and user intents all produce actions; reducers
//! consume them. Actions serialize as `{ "type": ..., "payload": ... }`.

use geojson::{Feature, FeatureCollection};
use serde::{Deserialize, Serialize};

use crate::models::{
    AnnotationMode, AnnotationOperation, Case, CaseOrientation, CaseTimeState, ContextEntity,
    DataInputFiltersState, FacetsState, Geometry, MapData, MapSettings, MiscOverlays, Overlay,
    OverlaysManualProcessArgs, OverlaysScannedAreaData, OverlaysTranslationData, StylePatch,
    ToolsFlag,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    // Maps
    SetMapsData {
        maps_list: Vec<MapSettings>,
    },
    SetActiveMapId(String),
    SetLayout(String),
    UpdateMap {
        id: String,
        data: MapData,
    },
    ActiveMapChanged(String),

    // Status bar
    SetImageOpeningOrientation {
        orientation: CaseOrientation,
    },

    // Overlays
    SetOverlaysCriteria {
        time: Option<CaseTimeState>,
        region: serde_json::Value,
        data_input_filters: DataInputFiltersState,
        no_initial_search: Option<bool>,
    },
    SetMiscOverlays {
        misc_overlays: MiscOverlays,
    },

    // Overlay status
    SetFavoriteOverlays(Vec<Overlay>),
    SetPresetOverlays(Vec<Overlay>),
    SetOverlaysTranslationData(OverlaysTranslationData),
    SetOverlaysScannedAreaData(OverlaysScannedAreaData),
    SetOverlayScannedAreaData {
        id: String,
        area: Geometry,
    },
    ActivateScannedArea,
    SetRemovedOverlaysIds(Vec<String>),
    SetRemovedOverlaysVisibility(bool),
    BackToWorldView {
        map_id: String,
    },
    BackToWorldSuccess {
        map_id: String,
    },
    BackToWorldFailed {
        map_id: String,
        error: String,
    },
    ToggleDraggedMode {
        map_id: String,
        overlay_id: String,
        dragged: bool,
    },

    // Layers
    BeginLayerCollectionLoad {
        case_id: String,
    },
    UpdateSelectedLayersIds(Vec<String>),
    SetAnnotationsLayer(FeatureCollection),
    ToggleDisplayAnnotationsLayer(bool),

    // Tools
    UpdateOverlaysManualProcessArgs {
        full_override: bool,
        data: OverlaysManualProcessArgs,
    },
    SetAnnotationMode {
        annotation_mode: Option<AnnotationMode>,
        map_id: Option<String>,
    },
    SetMeasureDistanceToolState(bool),
    UpdateToolsFlags(Vec<(ToolsFlag, bool)>),
    SetAutoImageProcessingSuccess(bool),
    EnableImageProcessing,
    DisableImageProcessing,
    SetMapGeoEnabledMode(bool),
    StartMouseShadow {
        update_tools: bool,
        from_user: bool,
    },
    StopMouseShadow {
        update_tools: bool,
        from_user: bool,
    },
    SetPinLocationMode(bool),
    AnnotationSetProperties(StylePatch),
    HideMeasurePanel(bool),
    AnnotationVisualizerAgent(AnnotationOperation),
    AnnotationDrawEnd(Feature),

    // Filters
    UpdateFacets(FacetsState),

    // Context
    SetContextParams {
        context_entities: Vec<ContextEntity>,
    },

    // Cases
    SelectCase {
        case: Box<Case>,
        no_initial_search: Option<bool>,
    },
    SelectCaseSuccess(Box<Case>),
    SetAutoSave(bool),

    // Notifications
    SetToastMessage {
        toast_text: String,
        show_warning_icon: bool,
    },
}

impl Action {
    /// Clear the annotation mode everywhere
    pub fn reset_annotation_mode() -> Self {
        Action::SetAnnotationMode { annotation_mode: None, map_id: None }
    }

    pub fn warning_toast(text: impl Into<String>) -> Self {
        Action::SetToastMessage { toast_text: text.into(), show_warning_icon: true }
    }

    /// Stable, human-readable action type used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetMapsData { .. } => "[Maps] Set maps data",
            Action::SetActiveMapId(_) => "[Maps] Set active map id",
            Action::SetLayout(_) => "[Maps] Set layout",
            Action::UpdateMap { .. } => "[Maps] Update map",
            Action::ActiveMapChanged(_) => "[Maps] Active map changed",
            Action::SetImageOpeningOrientation { .. } => "[Status bar] Set image opening orientation",
            Action::SetOverlaysCriteria { .. } => "[Overlays] Set overlays criteria",
            Action::SetMiscOverlays { .. } => "[Overlays] Set misc overlays",
            Action::SetFavoriteOverlays(_) => "[Overlay status] Set favorite overlays",
            Action::SetPresetOverlays(_) => "[Overlay status] Set preset overlays",
            Action::SetOverlaysTranslationData(_) => "[Overlay status] Set overlays translation data",
            Action::SetOverlaysScannedAreaData(_) => "[Overlay status] Set overlays scanned area data",
            Action::SetOverlayScannedAreaData { .. } => "[Overlay status] Set overlay scanned area data",
            Action::ActivateScannedArea => "[Overlay status] Activate scanned area",
            Action::SetRemovedOverlaysIds(_) => "[Overlay status] Set removed overlays ids",
            Action::SetRemovedOverlaysVisibility(_) => "[Overlay status] Set removed overlays visibility",
            Action::BackToWorldView { .. } => "[Overlay status] Back to world view",
            Action::BackToWorldSuccess { .. } => "[Overlay status] Back to world success",
            Action::BackToWorldFailed { .. } => "[Overlay status] Back to world failed",
            Action::ToggleDraggedMode { .. } => "[Overlay status] Toggle dragged mode",
            Action::BeginLayerCollectionLoad { .. } => "[Layers] Begin layer collection load",
            Action::UpdateSelectedLayersIds(_) => "[Layers] Update selected layers ids",
            Action::SetAnnotationsLayer(_) => "[Layers] Set annotations layer",
            Action::ToggleDisplayAnnotationsLayer(_) => "[Layers] Toggle display annotations layer",
            Action::UpdateOverlaysManualProcessArgs { .. } => "[Tools] Update overlays manual process args",
            Action::SetAnnotationMode { .. } => "[Tools] Set annotation mode",
            Action::SetMeasureDistanceToolState(_) => "[Tools] Set measure tool state",
            Action::UpdateToolsFlags(_) => "[Tools] Update tools flags",
            Action::SetAutoImageProcessingSuccess(_) => "[Tools] Set auto image processing success",
            Action::EnableImageProcessing => "[Tools] Enable image processing",
            Action::DisableImageProcessing => "[Tools] Disable image processing",
            Action::SetMapGeoEnabledMode(_) => "[Tools] Map geo enabled mode changed",
            Action::StartMouseShadow { .. } => "[Tools] Start mouse shadow",
            Action::StopMouseShadow { .. } => "[Tools] Stop mouse shadow",
            Action::SetPinLocationMode(_) => "[Tools] Set pin location mode",
            Action::AnnotationSetProperties(_) => "[Tools] Annotation set properties",
            Action::HideMeasurePanel(_) => "[Tools] Hide measure panel",
            Action::AnnotationVisualizerAgent(_) => "[Tools] Annotation visualizer agent",
            Action::AnnotationDrawEnd(_) => "[Maps] Annotation draw end",
            Action::UpdateFacets(_) => "[Filters] Update facets",
            Action::SetContextParams { .. } => "[Context] Set context params",
            Action::SelectCase { .. } => "[Cases] Select case",
            Action::SelectCaseSuccess(_) => "[Cases] Select case success",
            Action::SetAutoSave(_) => "[Cases] Set auto save",
            Action::SetToastMessage { .. } => "[Maps] Set toast message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_shape() {
        let action = Action::SetActiveMapId("m1".to_string());
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "setActiveMapId");
        assert_eq!(json["payload"], "m1");
    }

    #[test]
    fn test_unit_action_roundtrip() {
        let json = serde_json::to_string(&Action::ActivateScannedArea).unwrap();
        let parsed: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Action::ActivateScannedArea);
    }

    #[test]
    fn test_reset_annotation_mode_targets_no_map() {
        match Action::reset_annotation_mode() {
            Action::SetAnnotationMode { annotation_mode, map_id } => {
                assert!(annotation_mode.is_none());
                assert!(map_id.is_none());
            }
            other => panic!("Unexpected action {:?}", other),
        }
    }
}
