//! Application state and reducers.
//!
//! Every slice reduces by value: `reduce(self, &Action) -> Self`. Slices
//! ignore actions they do not own.

pub mod layers;
pub mod maps;
pub mod overlays;
pub mod tools;

use overwatch_core::models::{Case, CaseOrientation, ContextEntity, FacetsState};
use overwatch_core::Action;

pub use layers::LayersState;
pub use maps::MapsState;
pub use overlays::{OverlayStatusState, OverlaysCriteria, OverlaysState};
pub use tools::ToolsState;

/// The currently open case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasesState {
    pub selected_case: Option<Case>,
    pub auto_save: bool,
}

impl CasesState {
    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::SelectCaseSuccess(case) => self.selected_case = Some(case.as_ref().clone()),
            Action::SetAutoSave(auto_save) => self.auto_save = *auto_save,
            _ => {}
        }
        self
    }
}

/// Last notification shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub show_warning_icon: bool,
}

/// The whole application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub maps: MapsState,
    pub overlays: OverlaysState,
    pub overlay_status: OverlayStatusState,
    pub cases: CasesState,
    pub layers: LayersState,
    pub tools: ToolsState,
    pub facets: FacetsState,
    pub context_entities: Vec<ContextEntity>,
    pub orientation: CaseOrientation,
    pub toast: Option<ToastMessage>,
}

impl AppState {
    pub fn reduce(self, action: &Action) -> Self {
        let AppState {
            maps,
            overlays,
            overlay_status,
            cases,
            layers,
            tools,
            mut facets,
            mut context_entities,
            mut orientation,
            mut toast,
        } = self;

        match action {
            Action::UpdateFacets(next) => facets = next.clone(),
            Action::SetContextParams { context_entities: next } => context_entities = next.clone(),
            Action::SetImageOpeningOrientation { orientation: next } => orientation = *next,
            Action::SetToastMessage { toast_text, show_warning_icon } => {
                toast = Some(ToastMessage {
                    text: toast_text.clone(),
                    show_warning_icon: *show_warning_icon,
                })
            }
            _ => {}
        }

        AppState {
            maps: maps.reduce(action),
            overlays: overlays.reduce(action),
            overlay_status: overlay_status.reduce(action),
            cases: cases.reduce(action),
            layers: layers.reduce(action),
            tools: tools.reduce(action),
            facets,
            context_entities,
            orientation,
            toast,
        }
    }
}
