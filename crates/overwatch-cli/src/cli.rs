use clap::{Parser, Subcommand};
use overwatch_core::models::RelevantMaps;
use std::path::PathBuf;

/// Overwatch - Multi-viewport synchronization engine
#[derive(Parser, Debug)]
#[command(name = "overwatch")]
#[command(about = "Replay cases and inspect viewport synchronization", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// EPSG code scanned areas are stored in
    #[arg(long, global = true, value_name = "EPSG")]
    pub scanned_area_crs: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the action stream that restores a case
    Restore(RestoreArgs),

    /// Accumulate polygon extents into a scanned area
    Scan(ScanArgs),

    /// Resolve which viewports a targeting mode selects
    Route(RouteArgs),

    /// Show the layered configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Path to a case document (JSON)
    pub path: PathBuf,

    /// Restore without triggering the initial overlay search
    #[arg(long)]
    pub no_initial_search: bool,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// GeoJSON file; every polygon feature is one successive extent
    pub path: PathBuf,

    /// Overlay the extents belong to
    #[arg(long, default_value = "overlay")]
    pub overlay: String,

    /// EPSG code the extents are expressed in
    #[arg(long, default_value = "4326", value_name = "EPSG")]
    pub extent_crs: u32,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Targeting mode (all, others, or active)
    pub mode: RelevantMaps,

    /// Viewport ids in layout order
    #[arg(long, value_delimiter = ',', required = true)]
    pub maps: Vec<String>,

    /// Id of the active viewport
    #[arg(long)]
    pub active: Option<String>,
}
