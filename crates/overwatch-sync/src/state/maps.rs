use overwatch_core::models::MapSettings;
use overwatch_core::Action;

/// Viewport layout and the active viewport
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapsState {
    pub maps_list: Vec<MapSettings>,
    pub active_map_id: Option<String>,
    pub layout: String,
}

impl MapsState {
    pub fn map(&self, id: &str) -> Option<&MapSettings> {
        self.maps_list.iter().find(|map| map.id == id)
    }

    pub fn active_map(&self) -> Option<&MapSettings> {
        self.active_map_id.as_deref().and_then(|id| self.map(id))
    }

    /// Viewport ids in layout order
    pub fn ids(&self) -> Vec<String> {
        self.maps_list.iter().map(|map| map.id.clone()).collect()
    }

    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::SetMapsData { maps_list } => self.maps_list = maps_list.clone(),
            Action::SetActiveMapId(id) => {
                self.active_map_id = if id.is_empty() { None } else { Some(id.clone()) }
            }
            Action::SetLayout(layout) => self.layout = layout.clone(),
            Action::UpdateMap { id, data } => {
                if let Some(map) = self.maps_list.iter_mut().find(|map| &map.id == id) {
                    map.data = data.clone();
                }
            }
            _ => {}
        }
        self
    }
}
