use crate::assets::AssetLoader;
use paint_grid::{ParseColorError, Rgb};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from config.yaml
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Upper bound for one analysis or quantization run
    pub analysis_timeout_ms: u64,

    /// Largest accepted upload body
    pub max_upload_bytes: usize,

    /// Largest accepted image width or height after decoding
    pub max_image_dimension: u32,

    /// Largest grid size the API will produce
    pub max_grid_size: u32,

    /// Color count used when a request does not specify one
    pub default_max_colors: usize,

    pub preview: PreviewConfig,

    pub sheet: SheetConfig,
}

/// On-screen preview raster settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Template file name (relative to the templates directory)
    pub template: String,

    /// Side of the square preview in pixels
    pub size: u32,

    /// Cell outline color as hex
    pub border_color: String,

    /// Cell outline width in pixels
    pub border_width: f32,
}

/// Printable sheet settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    /// Template file name (relative to the templates directory)
    pub template: String,

    pub title: String,

    pub subtitle: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_timeout_ms: 10_000,
            max_upload_bytes: 20 * 1024 * 1024,
            max_image_dimension: 8192,
            max_grid_size: 100,
            default_max_colors: 12,
            preview: PreviewConfig::default(),
            sheet: SheetConfig::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            template: "preview.svg".to_string(),
            size: 400,
            border_color: "#8b5cf6".to_string(),
            border_width: 0.5,
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            template: "sheet.svg".to_string(),
            title: "Paint by Numbers".to_string(),
            subtitle: "Paint each cell with the color of its number".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        max_grid_size = config.max_grid_size,
                        default_max_colors = config.default_max_colors,
                        timeout_ms = config.analysis_timeout_ms,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Analysis/quantization timeout as a Duration
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_millis(self.analysis_timeout_ms)
    }
}

impl PreviewConfig {
    /// Parsed outline color
    pub fn border_rgb(&self) -> Result<Rgb, ParseColorError> {
        self.border_color.parse()
    }
}
