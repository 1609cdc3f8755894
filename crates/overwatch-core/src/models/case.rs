use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::map::MapSettings;
use super::overlay::{MiscOverlays, Overlay, OverlaysScannedAreaData, OverlaysTranslationData};
use super::tools::OverlaysManualProcessArgs;

/// A persisted investigation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub owner: Option<String>,

    pub creation_time: DateTime<Utc>,

    pub last_modified: DateTime<Utc>,

    #[serde(default)]
    pub auto_save: bool,

    #[serde(default)]
    pub state: CaseState,
}

impl Case {
    /// Create a case with an empty state, stamped now
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            owner: None,
            creation_time: now,
            last_modified: now,
            auto_save: false,
            state: CaseState::default(),
        }
    }

    /// Parse a case document from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How imagery is rotated when opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseOrientation {
    #[default]
    #[serde(rename = "Align North")]
    AlignNorth,
    #[serde(rename = "User Perspective")]
    UserPerspective,
    #[serde(rename = "Imagery Perspective")]
    ImageryPerspective,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseTimeFilter {
    #[default]
    #[serde(rename = "Start - End")]
    StartEnd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTimeState {
    #[serde(rename = "type")]
    pub kind: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataInputFiltersState {
    pub fully_checked: bool,
    pub filters: Vec<serde_json::Value>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseMapsState {
    pub active_map_id: String,
    pub data: Vec<MapSettings>,
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseLayersState {
    pub active_layers_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetsState {
    pub show_only_favorites: bool,
    pub filters: Vec<serde_json::Value>,
}

/// An external entity (e.g. a reported sighting) pinned to the case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextEntity {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub feature_json: Option<serde_json::Value>,
}

/// Closed snapshot of every feature area of a session.
///
/// Fields are not validated on load; each consumer of a slice applies its
/// own defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseState {
    pub orientation: CaseOrientation,
    pub time_filter: CaseTimeFilter,
    pub time: Option<CaseTimeState>,
    pub region: serde_json::Value,
    pub data_input_filters: DataInputFiltersState,
    pub favorite_overlays: Vec<Overlay>,
    pub preset_overlays: Vec<Overlay>,
    pub removed_overlays_ids: Vec<String>,
    pub removed_overlays_visibility: bool,
    pub maps: CaseMapsState,
    pub layers: CaseLayersState,
    pub overlays_manual_process_args: OverlaysManualProcessArgs,
    pub facets: FacetsState,
    pub context_entities: Vec<ContextEntity>,
    pub misc_overlays: MiscOverlays,
    pub overlays_translation_data: OverlaysTranslationData,
    pub overlays_scanned_area_data: OverlaysScannedAreaData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_case() {
        let json = r#"{
            "id": "caseId",
            "name": "caseName",
            "creationTime": "2024-01-01T00:00:00Z",
            "lastModified": "2024-01-02T00:00:00Z"
        }"#;

        let case = Case::from_json(json).unwrap();
        assert_eq!(case.id, "caseId");
        assert!(!case.auto_save);
        assert!(case.state.maps.data.is_empty());
        assert_eq!(case.state.orientation, CaseOrientation::AlignNorth);
    }

    #[test]
    fn test_parse_case_state_fields() {
        let json = r#"{
            "id": "c1",
            "name": "n",
            "owner": "analyst",
            "creationTime": "2024-01-01T00:00:00Z",
            "lastModified": "2024-01-01T00:00:00Z",
            "autoSave": true,
            "state": {
                "orientation": "Imagery Perspective",
                "maps": {
                    "activeMapId": "m1",
                    "layout": "layout2",
                    "data": [{ "id": "m1" }, { "id": "m2", "worldView": { "mapType": "CesiumMap" } }]
                },
                "removedOverlaysIds": ["o9"],
                "overlaysScannedAreaData": {
                    "o1": { "type": "MultiPolygon", "coordinates": [] }
                }
            }
        }"#;

        let case = Case::from_json(json).unwrap();
        assert!(case.auto_save);
        assert_eq!(case.state.orientation, CaseOrientation::ImageryPerspective);
        assert_eq!(case.state.maps.active_map_id, "m1");
        assert_eq!(case.state.maps.data[1].world_view.map_type, "CesiumMap");
        assert_eq!(case.state.removed_overlays_ids, vec!["o9".to_string()]);
        assert!(case.state.overlays_scanned_area_data.contains_key("o1"));
    }

    #[test]
    fn test_malformed_region_is_passed_through() {
        let json = r#"{
            "id": "c1",
            "name": "n",
            "creationTime": "2024-01-01T00:00:00Z",
            "lastModified": "2024-01-01T00:00:00Z",
            "state": { "region": { "not": "a geometry" } }
        }"#;

        let case = Case::from_json(json).unwrap();
        assert_eq!(case.state.region, serde_json::json!({ "not": "a geometry" }));
    }
}
