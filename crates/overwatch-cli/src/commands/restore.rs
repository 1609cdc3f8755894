//! Restore command implementation

use crate::cli::RestoreArgs;
use crate::output::OutputWriter;
use crate::output_types::{ActionRow, RestoreOutput};
use anyhow::{Context, Result};
use overwatch_core::config::LayeredConfig;
use overwatch_core::models::Case;
use overwatch_core::Action;
use overwatch_imagery::CommunicatorRegistry;
use overwatch_sync::Session;
use std::fs;

pub async fn execute(args: RestoreArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read case file: {}", args.path.display()))?;
    let case = Case::from_json(&content)
        .with_context(|| format!("Failed to parse case file: {}", args.path.display()))?;

    let registry = CommunicatorRegistry::new(config.event_capacity.value);
    let mut session = Session::new(registry, config);
    let no_initial_search = args.no_initial_search.then_some(true);

    let (case_id, case_name) = (case.id.clone(), case.name.clone());
    tracing::info!(case_id = %case_id, path = %args.path.display(), "Opening case");
    let actions = session.open_case(case, no_initial_search).await;
    tracing::debug!(case_id = %case_id, actions = actions.len(), "Case dispatch drained");

    if output.is_json() {
        output.result(RestoreOutput { case_id, case_name, actions })?;
        return Ok(());
    }

    output.section(format!("Restoring case {} ({})", case_name, case_id));
    let rows: Vec<ActionRow> = actions
        .iter()
        .enumerate()
        .map(|(index, action)| ActionRow { index, kind: action.kind(), summary: summarize(action) })
        .collect();
    output.table(rows);

    let state = session.state();
    output.section("Restored state");
    output.kv("Viewports", state.maps.ids().join(", "));
    output.kv("Active viewport", state.maps.active_map_id.as_deref().unwrap_or("(none)"));
    output.kv("Layout", &state.maps.layout);
    output.kv("Auto save", state.cases.auto_save);
    output.success(format!("Restored {} actions", actions.len()));

    Ok(())
}

/// One-line description of an action's payload
fn summarize(action: &Action) -> String {
    match action {
        Action::SelectCase { case, .. } | Action::SelectCaseSuccess(case) => case.id.clone(),
        Action::SetMapsData { maps_list } => format!("{} viewports", maps_list.len()),
        Action::SetActiveMapId(id) | Action::SetLayout(id) => id.clone(),
        Action::SetImageOpeningOrientation { orientation } => format!("{:?}", orientation),
        Action::SetOverlaysCriteria { time, .. } => match time {
            Some(time) => format!("{} to {}", time.from, time.to),
            None => "no time range".to_string(),
        },
        Action::SetFavoriteOverlays(overlays) | Action::SetPresetOverlays(overlays) => {
            format!("{} overlays", overlays.len())
        }
        Action::SetMiscOverlays { misc_overlays } => format!("{} entries", misc_overlays.len()),
        Action::SetOverlaysTranslationData(data) => format!("{} overlays", data.len()),
        Action::SetOverlaysScannedAreaData(data) => format!("{} overlays", data.len()),
        Action::BeginLayerCollectionLoad { case_id } => case_id.clone(),
        Action::UpdateOverlaysManualProcessArgs { full_override, data } => {
            format!("{} overlays (override: {})", data.len(), full_override)
        }
        Action::UpdateFacets(facets) => format!("{} filters", facets.filters.len()),
        Action::UpdateSelectedLayersIds(ids) | Action::SetRemovedOverlaysIds(ids) => {
            format!("{} ids", ids.len())
        }
        Action::SetContextParams { context_entities } => {
            format!("{} entities", context_entities.len())
        }
        Action::SetAutoSave(value)
        | Action::SetRemovedOverlaysVisibility(value)
        | Action::SetMeasureDistanceToolState(value) => value.to_string(),
        Action::SetAnnotationMode { annotation_mode, .. } => match annotation_mode {
            Some(mode) => format!("{:?}", mode),
            None => "none".to_string(),
        },
        _ => String::new(),
    }
}
