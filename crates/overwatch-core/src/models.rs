pub mod annotation;
pub mod case;
pub mod geometry;
pub mod map;
pub mod overlay;
pub mod tools;

pub use annotation::{
    AnnotationAgentOperation, AnnotationMode, AnnotationOperation, RelevantMaps, StylePatch,
    VisualizerEntity, VisualizerStyle,
};
pub use case::{
    Case, CaseLayersState, CaseMapsState, CaseOrientation, CaseState, CaseTimeFilter,
    CaseTimeState, ContextEntity, DataInputFiltersState, FacetsState,
};
pub use geometry::{Crs, Geometry, GeometryType, PolygonCoords, Ring, ValidityMode};
pub use map::{MapData, MapPosition, MapSettings, WorldView};
pub use overlay::{
    MiscOverlays, Overlay, OverlaysScannedAreaData, OverlaysTranslationData, TranslationData,
};
pub use tools::{
    ImageManualProcessArgs, ImageProcParam, OverlaysManualProcessArgs, ToolsFlag, ToolsFlags,
};
