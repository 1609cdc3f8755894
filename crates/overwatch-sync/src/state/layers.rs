use geojson::FeatureCollection;
use overwatch_core::Action;

/// Layer selection and the persisted annotations layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayersState {
    pub annotations_layer: FeatureCollection,
    /// Whether annotations are shown on every viewport or only the active one
    pub display_annotations_layer: bool,
    pub selected_layers_ids: Vec<String>,
    /// Case whose layer collection is being fetched
    pub loading_case_id: Option<String>,
}

impl Default for LayersState {
    fn default() -> Self {
        Self {
            annotations_layer: FeatureCollection {
                bbox: None,
                features: Vec::new(),
                foreign_members: None,
            },
            display_annotations_layer: false,
            selected_layers_ids: Vec::new(),
            loading_case_id: None,
        }
    }
}

impl LayersState {
    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::BeginLayerCollectionLoad { case_id } => {
                self.loading_case_id = Some(case_id.clone())
            }
            Action::UpdateSelectedLayersIds(ids) => self.selected_layers_ids = ids.clone(),
            Action::SetAnnotationsLayer(layer) => self.annotations_layer = layer.clone(),
            Action::ToggleDisplayAnnotationsLayer(display) => {
                self.display_annotations_layer = *display
            }
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_collection_load_tracks_case() {
        let state = LayersState::default()
            .reduce(&Action::BeginLayerCollectionLoad { case_id: "c1".to_string() })
            .reduce(&Action::UpdateSelectedLayersIds(vec!["l1".to_string()]));

        assert_eq!(state.loading_case_id.as_deref(), Some("c1"));
        assert_eq!(state.selected_layers_ids, vec!["l1"]);
    }

    #[test]
    fn test_display_toggle() {
        let state = LayersState::default().reduce(&Action::ToggleDisplayAnnotationsLayer(true));
        assert!(state.display_annotations_layer);
    }
}
