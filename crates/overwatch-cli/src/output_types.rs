use overwatch_core::Action;
use serde::Serialize;
use tabled::Tabled;

/// Output for restore command
#[derive(Debug, Serialize)]
pub struct RestoreOutput {
    pub case_id: String,
    pub case_name: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Tabled)]
pub struct ActionRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Action")]
    pub kind: &'static str,
    #[tabled(rename = "Summary")]
    pub summary: String,
}

/// Output for scan command
#[derive(Debug, Serialize)]
pub struct ScanOutput {
    pub overlay_id: String,
    pub crs: u32,
    pub steps: Vec<ScanStep>,
    pub area: f64,
    pub polygon_count: usize,
    pub bbox: Option<[f64; 4]>,
    pub scanned_area: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ScanStep {
    #[tabled(rename = "Step")]
    pub step: usize,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Polygons")]
    pub polygon_count: usize,
    #[tabled(rename = "Area")]
    pub area: f64,
}

/// Output for route command
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub mode: String,
    pub active: Option<String>,
    pub targets: Vec<String>,
}

/// Output for config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
