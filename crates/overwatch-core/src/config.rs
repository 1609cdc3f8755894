use crate::error::{OverwatchError, Result};
use crate::models::{ImageProcParam, ValidityMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the workbench engine
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// EPSG code scanned areas are stored in
    pub scanned_area_crs: ConfigValue<u32>,
    /// Renderer a viewport falls back to when leaving an overlay
    pub world_view_map_type: ConfigValue<String>,
    /// Renderers that cannot display a world view and must be switched away from
    pub disabled_map_types: ConfigValue<Vec<String>>,
    pub geometry_validity: ConfigValue<ValidityMode>,
    /// Buffer size of the registry notification channels
    pub event_capacity: ConfigValue<usize>,
    pub image_proc_params: ConfigValue<Vec<ImageProcParam>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            scanned_area_crs: ConfigValue::new(4326, ConfigSource::Default),
            world_view_map_type: ConfigValue::new(
                "openLayersMap".to_string(),
                ConfigSource::Default,
            ),
            disabled_map_types: ConfigValue::new(
                vec!["disabledOpenLayersMap".to_string(), "video".to_string()],
                ConfigSource::Default,
            ),
            geometry_validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
            event_capacity: ConfigValue::new(64, ConfigSource::Default),
            image_proc_params: ConfigValue::new(ImageProcParam::defaults(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| OverwatchError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| OverwatchError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(crs) = file_config.scanned_area_crs {
            self.scanned_area_crs.update(crs, ConfigSource::File);
        }

        if let Some(map_type) = file_config.world_view_map_type {
            self.world_view_map_type.update(map_type, ConfigSource::File);
        }

        if let Some(map_types) = file_config.disabled_map_types {
            self.disabled_map_types.update(map_types, ConfigSource::File);
        }

        if let Some(geometry_validity) = file_config.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::File);
        }

        if let Some(capacity) = file_config.event_capacity {
            self.event_capacity.update(capacity, ConfigSource::File);
        }

        if let Some(params) = file_config.image_proc_params {
            self.image_proc_params.update(params, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // OVERWATCH_SCANNED_AREA_CRS
        if let Ok(crs_str) = env::var("OVERWATCH_SCANNED_AREA_CRS") {
            match crs_str.parse::<u32>() {
                Ok(crs) => self.scanned_area_crs.update(crs, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OVERWATCH_SCANNED_AREA_CRS value '{}': expected integer EPSG code",
                    crs_str
                ),
            }
        }

        // OVERWATCH_WORLD_VIEW_MAP_TYPE
        if let Ok(map_type) = env::var("OVERWATCH_WORLD_VIEW_MAP_TYPE") {
            self.world_view_map_type.update(map_type, ConfigSource::Environment);
        }

        // OVERWATCH_DISABLED_MAP_TYPES
        if let Ok(list) = env::var("OVERWATCH_DISABLED_MAP_TYPES") {
            let map_types: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            self.disabled_map_types.update(map_types, ConfigSource::Environment);
        }

        // OVERWATCH_GEOMETRY_VALIDITY
        if let Ok(validity_str) = env::var("OVERWATCH_GEOMETRY_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.geometry_validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OVERWATCH_GEOMETRY_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        // OVERWATCH_EVENT_CAPACITY
        if let Ok(capacity_str) = env::var("OVERWATCH_EVENT_CAPACITY") {
            match capacity_str.parse::<usize>() {
                Ok(capacity) if capacity > 0 => {
                    self.event_capacity.update(capacity, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid OVERWATCH_EVENT_CAPACITY value '{}': expected positive integer",
                    capacity_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(crs) = overrides.scanned_area_crs {
            self.scanned_area_crs.update(crs, ConfigSource::Cli);
        }

        if let Some(map_type) = overrides.world_view_map_type {
            self.world_view_map_type.update(map_type, ConfigSource::Cli);
        }

        if let Some(geometry_validity) = overrides.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::Cli);
        }
    }

    /// Whether a renderer type must be switched away from to show a world view
    pub fn is_disabled_map_type(&self, map_type: &str) -> bool {
        self.disabled_map_types.value.iter().any(|t| t == map_type)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "scanned_area_crs".to_string(),
            (format!("EPSG:{}", self.scanned_area_crs.value), self.scanned_area_crs.source),
        );

        map.insert(
            "world_view_map_type".to_string(),
            (self.world_view_map_type.value.clone(), self.world_view_map_type.source),
        );

        map.insert(
            "disabled_map_types".to_string(),
            (self.disabled_map_types.value.join(","), self.disabled_map_types.source),
        );

        map.insert(
            "geometry_validity".to_string(),
            (format!("{:?}", self.geometry_validity.value), self.geometry_validity.source),
        );

        map.insert(
            "event_capacity".to_string(),
            (self.event_capacity.value.to_string(), self.event_capacity.source),
        );

        let params: Vec<String> = self
            .image_proc_params
            .value
            .iter()
            .map(|p| format!("{}={}", p.name, p.default_value))
            .collect();
        map.insert(
            "image_proc_params".to_string(),
            (params.join(","), self.image_proc_params.source),
        );

        map
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    scanned_area_crs: Option<u32>,
    world_view_map_type: Option<String>,
    disabled_map_types: Option<Vec<String>>,
    geometry_validity: Option<ValidityMode>,
    event_capacity: Option<usize>,
    image_proc_params: Option<Vec<ImageProcParam>>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub scanned_area_crs: Option<u32>,
    pub world_view_map_type: Option<String>,
    pub geometry_validity: Option<ValidityMode>,
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(OverwatchError::ConfigInvalid {
            key: "geometry_validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}
