//! Session restoration: expand one persisted case into the ordered action
//! stream that rebuilds application state.

use overwatch_core::models::Case;
use overwatch_core::Action;

/// Number of state-mutation actions emitted before the success signal
pub const RESTORE_MUTATION_COUNT: usize = 20;

/// Expand `case` into its restoration actions.
///
/// The order is fixed: layout and viewports first, then overlay metadata,
/// layer loading, filters, and finally the visual resets. The last action is
/// always [`Action::SelectCaseSuccess`] carrying `case` unmodified. No field
/// is validated here.
pub fn restore(case: &Case, no_initial_search: Option<bool>) -> Vec<Action> {
    let state = &case.state;

    let actions = vec![
        Action::SetMapsData { maps_list: state.maps.data.clone() },
        Action::SetActiveMapId(state.maps.active_map_id.clone()),
        Action::SetLayout(state.maps.layout.clone()),
        Action::SetImageOpeningOrientation { orientation: state.orientation },
        Action::SetOverlaysCriteria {
            time: state.time.clone(),
            region: state.region.clone(),
            data_input_filters: state.data_input_filters.clone(),
            no_initial_search,
        },
        Action::SetFavoriteOverlays(state.favorite_overlays.clone()),
        Action::SetPresetOverlays(state.preset_overlays.clone()),
        Action::SetMiscOverlays { misc_overlays: state.misc_overlays.clone() },
        Action::SetOverlaysTranslationData(state.overlays_translation_data.clone()),
        Action::SetOverlaysScannedAreaData(state.overlays_scanned_area_data.clone()),
        Action::BeginLayerCollectionLoad { case_id: case.id.clone() },
        Action::UpdateOverlaysManualProcessArgs {
            full_override: true,
            data: state.overlays_manual_process_args.clone(),
        },
        Action::UpdateFacets(state.facets.clone()),
        Action::UpdateSelectedLayersIds(Vec::new()),
        Action::SetContextParams { context_entities: state.context_entities.clone() },
        Action::SetAutoSave(case.auto_save),
        Action::SetRemovedOverlaysIds(state.removed_overlays_ids.clone()),
        Action::SetRemovedOverlaysVisibility(state.removed_overlays_visibility),
        Action::reset_annotation_mode(),
        Action::SetMeasureDistanceToolState(false),
        Action::SelectCaseSuccess(Box::new(case.clone())),
    ];

    debug_assert_eq!(actions.len(), RESTORE_MUTATION_COUNT + 1);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use overwatch_core::models::{MapSettings, Overlay};

    fn sample_case() -> Case {
        let mut case = Case::new("caseId", "Case");
        case.auto_save = true;
        case.state.maps.data = vec![MapSettings::new("m1"), MapSettings::new("m2")];
        case.state.maps.active_map_id = "m2".to_string();
        case.state.maps.layout = "layout2".to_string();
        case.state.favorite_overlays = vec![Overlay::new("fav")];
        case.state.removed_overlays_ids = vec!["gone".to_string()];
        case.state.removed_overlays_visibility = true;
        case
    }

    #[test]
    fn test_restore_order() {
        let actions = restore(&sample_case(), Some(true));
        let kinds: Vec<&str> = actions.iter().map(Action::kind).collect();

        assert_eq!(
            kinds,
            vec![
                "[Maps] Set maps data",
                "[Maps] Set active map id",
                "[Maps] Set layout",
                "[Status bar] Set image opening orientation",
                "[Overlays] Set overlays criteria",
                "[Overlay status] Set favorite overlays",
                "[Overlay status] Set preset overlays",
                "[Overlays] Set misc overlays",
                "[Overlay status] Set overlays translation data",
                "[Overlay status] Set overlays scanned area data",
                "[Layers] Begin layer collection load",
                "[Tools] Update overlays manual process args",
                "[Filters] Update facets",
                "[Layers] Update selected layers ids",
                "[Context] Set context params",
                "[Cases] Set auto save",
                "[Overlay status] Set removed overlays ids",
                "[Overlay status] Set removed overlays visibility",
                "[Tools] Set annotation mode",
                "[Tools] Set measure tool state",
                "[Cases] Select case success",
            ]
        );
    }

    #[test]
    fn test_restore_payloads() {
        let case = sample_case();
        let actions = restore(&case, None);

        assert_eq!(actions[1], Action::SetActiveMapId("m2".to_string()));
        assert_eq!(actions[10], Action::BeginLayerCollectionLoad { case_id: "caseId".to_string() });
        assert_eq!(actions[13], Action::UpdateSelectedLayersIds(vec![]));
        assert_eq!(actions[15], Action::SetAutoSave(true));
        assert_eq!(actions[18], Action::reset_annotation_mode());
        assert_eq!(actions[19], Action::SetMeasureDistanceToolState(false));
        assert!(matches!(
            &actions[11],
            Action::UpdateOverlaysManualProcessArgs { full_override: true, .. }
        ));
    }

    #[test]
    fn test_success_carries_case_unmodified() {
        let case = sample_case();
        let actions = restore(&case, None);

        assert_eq!(actions.last(), Some(&Action::SelectCaseSuccess(Box::new(case))));
    }

    #[test]
    fn test_empty_case_still_restores_fully() {
        let actions = restore(&Case::new("empty", "Empty"), None);
        assert_eq!(actions.len(), RESTORE_MUTATION_COUNT + 1);
        assert_eq!(actions[0], Action::SetMapsData { maps_list: vec![] });
    }
}
