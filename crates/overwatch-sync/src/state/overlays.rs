use overwatch_core::models::{
    CaseTimeState, DataInputFiltersState, MiscOverlays, Overlay, OverlaysScannedAreaData,
    OverlaysTranslationData,
};
use overwatch_core::Action;

/// Search criteria for the overlay catalogue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlaysCriteria {
    pub time: Option<CaseTimeState>,
    pub region: serde_json::Value,
    pub data_input_filters: DataInputFiltersState,
    pub no_initial_search: Option<bool>,
}

/// Overlay search state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlaysState {
    pub criteria: OverlaysCriteria,
    pub misc_overlays: MiscOverlays,
}

impl OverlaysState {
    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::SetOverlaysCriteria { time, region, data_input_filters, no_initial_search } => {
                self.criteria = OverlaysCriteria {
                    time: time.clone(),
                    region: region.clone(),
                    data_input_filters: data_input_filters.clone(),
                    no_initial_search: *no_initial_search,
                }
            }
            Action::SetMiscOverlays { misc_overlays } => self.misc_overlays = misc_overlays.clone(),
            _ => {}
        }
        self
    }
}

/// Per-overlay status: favorites, removals, translation and scanned areas
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStatusState {
    pub favorite_overlays: Vec<Overlay>,
    pub preset_overlays: Vec<Overlay>,
    pub removed_overlays_ids: Vec<String>,
    pub removed_overlays_visibility: bool,
    pub overlays_translation_data: OverlaysTranslationData,
    pub overlays_scanned_area_data: OverlaysScannedAreaData,
}

impl Default for OverlayStatusState {
    fn default() -> Self {
        Self {
            favorite_overlays: Vec::new(),
            preset_overlays: Vec::new(),
            removed_overlays_ids: Vec::new(),
            removed_overlays_visibility: true,
            overlays_translation_data: OverlaysTranslationData::new(),
            overlays_scanned_area_data: OverlaysScannedAreaData::new(),
        }
    }
}

impl OverlayStatusState {
    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::SetFavoriteOverlays(overlays) => self.favorite_overlays = overlays.clone(),
            Action::SetPresetOverlays(overlays) => self.preset_overlays = overlays.clone(),
            Action::SetRemovedOverlaysIds(ids) => self.removed_overlays_ids = ids.clone(),
            Action::SetRemovedOverlaysVisibility(visible) => {
                self.removed_overlays_visibility = *visible
            }
            Action::SetOverlaysTranslationData(data) => {
                self.overlays_translation_data = data.clone()
            }
            Action::SetOverlaysScannedAreaData(data) => {
                self.overlays_scanned_area_data = data.clone()
            }
            Action::SetOverlayScannedAreaData { id, area } => {
                self.overlays_scanned_area_data.insert(id.clone(), area.clone());
            }
            Action::ToggleDraggedMode { overlay_id, dragged, .. } => {
                self.overlays_translation_data.entry(overlay_id.clone()).or_default().dragged =
                    *dragged;
            }
            _ => {}
        }
        self
    }
}
