use overwatch_core::models::{ImageManualProcessArgs, ImageProcParam, MapData};

/// Manual process args with every parameter at its neutral value
pub fn default_manual_process_args(params: &[ImageProcParam]) -> ImageManualProcessArgs {
    params
        .iter()
        .fold(ImageManualProcessArgs::default(), |args, param| {
            args.with(param.name.clone(), param.default_value)
        })
}

/// Whether a viewport's imagery needs a processing layer.
///
/// Processing is active when auto processing is on, or when manual args are
/// present and differ from the neutral defaults.
pub fn is_image_process_active(
    auto_active: bool,
    manual: Option<&ImageManualProcessArgs>,
    params: &[ImageProcParam],
) -> bool {
    auto_active || manual.is_some_and(|args| *args != default_manual_process_args(params))
}

/// [`is_image_process_active`] for a viewport's data
pub fn is_map_image_process_active(data: &MapData, params: &[ImageProcParam]) -> bool {
    is_image_process_active(
        data.is_auto_image_processing_active,
        data.image_manual_process_args.as_ref(),
        params,
    )
}
