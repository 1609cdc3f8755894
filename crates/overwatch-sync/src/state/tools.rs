use overwatch_core::models::{
    AnnotationMode, OverlaysManualProcessArgs, ToolsFlag, ToolsFlags, VisualizerStyle,
};
use overwatch_core::Action;

/// Tools state.
///
/// Flags are only ever replaced through [`ToolsFlags::with_flag`] and
/// [`ToolsFlags::with_flags`], so every previous flag table stays intact.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolsState {
    pub flags: ToolsFlags,
    pub annotation_mode: Option<AnnotationMode>,
    pub annotation_properties: VisualizerStyle,
    pub overlays_manual_process_args: OverlaysManualProcessArgs,
}

impl Default for ToolsState {
    fn default() -> Self {
        Self {
            flags: ToolsFlags::new().with_flag(ToolsFlag::GeoRegisteredOptionsEnabled, true),
            annotation_mode: None,
            annotation_properties: VisualizerStyle::default(),
            overlays_manual_process_args: OverlaysManualProcessArgs::new(),
        }
    }
}

impl ToolsState {
    pub fn flag(&self, flag: ToolsFlag) -> bool {
        self.flags.get(flag)
    }

    pub fn reduce(mut self, action: &Action) -> Self {
        match action {
            Action::UpdateOverlaysManualProcessArgs { full_override, data } => {
                if *full_override {
                    self.overlays_manual_process_args = data.clone();
                } else {
                    self.overlays_manual_process_args
                        .extend(data.iter().map(|(id, args)| (id.clone(), args.clone())));
                }
            }
            Action::SetAnnotationMode { annotation_mode, .. } => {
                self.annotation_mode = *annotation_mode
            }
            Action::SetMapGeoEnabledMode(enabled) => {
                self.flags = self.flags.with_flag(ToolsFlag::GeoRegisteredOptionsEnabled, *enabled)
            }
            Action::StartMouseShadow { update_tools, from_user } => {
                if *update_tools {
                    let mut updates = vec![(ToolsFlag::ShadowMouse, true)];
                    if *from_user {
                        updates.push((ToolsFlag::ShadowMouseActiveForManyScreens, true));
                    }
                    self.flags = self.flags.with_flags(updates);
                }
            }
            Action::StopMouseShadow { update_tools, from_user } => {
                if *update_tools {
                    let mut updates = vec![(ToolsFlag::ShadowMouse, false)];
                    if *from_user {
                        updates.push((ToolsFlag::ShadowMouseActiveForManyScreens, false));
                    }
                    self.flags = self.flags.with_flags(updates);
                }
            }
            Action::UpdateToolsFlags(updates) => {
                self.flags = self.flags.with_flags(updates.iter().copied())
            }
            Action::SetPinLocationMode(enabled) => {
                self.flags = self.flags.with_flag(ToolsFlag::PinLocation, *enabled)
            }
            Action::SetAutoImageProcessingSuccess(enabled) => {
                self.flags = self.flags.with_flag(ToolsFlag::AutoImageProcessing, *enabled)
            }
            Action::SetMeasureDistanceToolState(active) => {
                self.flags = self.flags.with_flag(ToolsFlag::IsMeasureToolActive, *active)
            }
            Action::EnableImageProcessing => {
                self.flags = self.flags.with_flags([
                    (ToolsFlag::ImageProcessingDisabled, false),
                    (ToolsFlag::AutoImageProcessing, false),
                ])
            }
            Action::DisableImageProcessing => {
                self.flags = self.flags.with_flags([
                    (ToolsFlag::ImageProcessingDisabled, true),
                    (ToolsFlag::AutoImageProcessing, false),
                ])
            }
            Action::AnnotationSetProperties(patch) => {
                self.annotation_properties = self.annotation_properties.merged(patch)
            }
            Action::HideMeasurePanel(hidden) => {
                self.flags = self.flags.with_flag(ToolsFlag::HideMeasure, *hidden)
            }
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overwatch_core::models::{ImageManualProcessArgs, StylePatch};

    #[test]
    fn test_initial_flags() {
        let state = ToolsState::default();
        assert!(state.flag(ToolsFlag::GeoRegisteredOptionsEnabled));
        assert!(!state.flag(ToolsFlag::ShadowMouse));
    }

    #[test]
    fn test_flag_update_is_copy_on_write() {
        let before = ToolsState::default();
        let snapshot = before.flags.clone();

        let after = before.reduce(&Action::SetPinLocationMode(true));

        assert!(after.flag(ToolsFlag::PinLocation));
        assert!(!snapshot.get(ToolsFlag::PinLocation));
    }

    #[test]
    fn test_mouse_shadow_respects_update_tools() {
        let skipped = ToolsState::default()
            .reduce(&Action::StartMouseShadow { update_tools: false, from_user: true });
        assert_eq!(skipped, ToolsState::default());

        let started = ToolsState::default()
            .reduce(&Action::StartMouseShadow { update_tools: true, from_user: true });
        assert!(started.flag(ToolsFlag::ShadowMouse));
        assert!(started.flag(ToolsFlag::ShadowMouseActiveForManyScreens));

        let stopped =
            started.reduce(&Action::StopMouseShadow { update_tools: true, from_user: false });
        assert!(!stopped.flag(ToolsFlag::ShadowMouse));
        assert!(stopped.flag(ToolsFlag::ShadowMouseActiveForManyScreens));
    }

    #[test]
    fn test_disable_image_processing_clears_auto() {
        let state = ToolsState::default()
            .reduce(&Action::SetAutoImageProcessingSuccess(true))
            .reduce(&Action::DisableImageProcessing);

        assert!(state.flag(ToolsFlag::ImageProcessingDisabled));
        assert!(!state.flag(ToolsFlag::AutoImageProcessing));

        let state = state.reduce(&Action::EnableImageProcessing);
        assert!(!state.flag(ToolsFlag::ImageProcessingDisabled));
    }

    #[test]
    fn test_manual_process_args_merge_and_override() {
        let mut first = OverlaysManualProcessArgs::new();
        first.insert("o1".to_string(), ImageManualProcessArgs::default().with("Contrast", 10.0));
        let mut second = OverlaysManualProcessArgs::new();
        second.insert("o2".to_string(), ImageManualProcessArgs::default().with("Gamma", 50.0));

        let merged = ToolsState::default()
            .reduce(&Action::UpdateOverlaysManualProcessArgs { full_override: false, data: first })
            .reduce(&Action::UpdateOverlaysManualProcessArgs {
                full_override: false,
                data: second.clone(),
            });
        assert_eq!(merged.overlays_manual_process_args.len(), 2);

        let replaced = merged
            .reduce(&Action::UpdateOverlaysManualProcessArgs { full_override: true, data: second });
        assert_eq!(replaced.overlays_manual_process_args.len(), 1);
        assert!(replaced.overlays_manual_process_args.contains_key("o2"));
    }

    #[test]
    fn test_annotation_properties_merge() {
        let state = ToolsState::default().reduce(&Action::AnnotationSetProperties(StylePatch {
            fill: Some("#000000".to_string()),
            ..Default::default()
        }));

        assert_eq!(state.annotation_properties.fill, "#000000");
        assert_eq!(state.annotation_properties.stroke, "#27b2cf");
    }

    #[test]
    fn test_annotation_mode_set_and_reset() {
        let state = ToolsState::default().reduce(&Action::SetAnnotationMode {
            annotation_mode: Some(AnnotationMode::Arrow),
            map_id: None,
        });
        assert_eq!(state.annotation_mode, Some(AnnotationMode::Arrow));

        let state = state.reduce(&Action::reset_annotation_mode());
        assert!(state.annotation_mode.is_none());
    }
}
