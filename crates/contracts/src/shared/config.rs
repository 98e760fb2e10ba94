use crate::domain::a001_area::{Coordinates, SafetyLevel};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub map: MapConfig,
    pub markers: MarkerConfig,
    pub storage: StorageConfig,
    pub reports: ReportsConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MapConfig {
    /// `[lat, lon]` of the initial view.
    pub center: [f64; 2],
    pub zoom: u8,
    /// Zoom used when recentering on a selected area.
    pub selected_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl MapConfig {
    pub fn center(&self) -> Coordinates {
        Coordinates::from(self.center)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MarkerConfig {
    pub normal_size: u32,
    pub highlighted_size: u32,
    pub highlighted_scale: f64,
    pub highlighted_z_index: i32,
    pub colors: SafetyColors,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SafetyColors {
    pub safe: String,
    pub caution: String,
    pub danger: String,
}

impl SafetyColors {
    pub fn for_level(&self, level: SafetyLevel) -> &str {
        match level {
            SafetyLevel::Safe => &self.safe,
            SafetyLevel::Caution => &self.caution,
            SafetyLevel::Danger => &self.danger,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub dark_mode_key: String,
    pub reports_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportsConfig {
    /// How many reports the page lists; the store itself is unbounded.
    pub display_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub file_name: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r##"
[map]
center = [23.3441, 85.3096]
zoom = 11
selected_zoom = 13
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = "© OpenStreetMap contributors"

[markers]
normal_size = 20
highlighted_size = 26
highlighted_scale = 1.3
highlighted_z_index = 1000

[markers.colors]
safe = "#28a745"
caution = "#ffc107"
danger = "#dc3545"

[storage]
dark_mode_key = "darkMode"
reports_key = "crimeReports"

[reports]
display_limit = 10

[export]
file_name = "ranchi-crime-data.json"
"##;

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load the embedded configuration.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    log::debug!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG)
}
