use crate::assets::AssetLoader;
use crate::models::catalogue::{load_catalogue, CatalogueError};
use bead_quantize::Palette;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Grid size defaults and accepted range
    #[serde(default)]
    pub grid: GridConfig,

    /// Optional catalogue file; the built-in catalogue is used when unset
    #[serde(default)]
    pub palette: Option<PathBuf>,

    /// Preview rendering
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Image stylizer endpoint
    #[serde(default)]
    pub stylize: StylizeConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    #[serde(default = "default_grid_size")]
    pub default_size: u32,
    #[serde(default = "default_min_size")]
    pub min_size: u32,
    #[serde(default = "default_max_size")]
    pub max_size: u32,
}

fn default_grid_size() -> u32 {
    32
}

fn default_min_size() -> u32 {
    8
}

fn default_max_size() -> u32 {
    256
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_size: default_grid_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

impl GridConfig {
    pub fn contains(&self, grid_size: u32) -> bool {
        (self.min_size..=self.max_size).contains(&grid_size)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Pixels per bead
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_max_cell_size")]
    pub max_cell_size: u32,
}

fn default_cell_size() -> u32 {
    12
}

fn default_max_cell_size() -> u32 {
    64
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            max_cell_size: default_max_cell_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StylizeConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_image_size")]
    pub size: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/images/edits".to_string()
}

fn default_model() -> String {
    "gpt-image-1".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_prompt() -> String {
    "Turn this photo into a cute, clean cartoon with bold outlines. \
     Keep the subject's features and the composition. Do not add text."
        .to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for StylizeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            size: default_image_size(),
            prompt: default_prompt(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Option<Self>>(&content) {
                Ok(config) => {
                    // An empty file parses as None
                    let config = config.unwrap_or_default();
                    tracing::info!(
                        default_grid = config.grid.default_size,
                        min_grid = config.grid.min_size,
                        max_grid = config.grid.max_size,
                        palette = ?config.palette,
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

    /// The configured catalogue, or the built-in one
    pub fn load_palette(&self) -> Result<Palette, CatalogueError> {
        match self.palette {
            Some(ref path) => load_catalogue(path),
            None => Ok(Palette::builtin()),
        }
    }
}
