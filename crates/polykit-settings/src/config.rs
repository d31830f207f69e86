//! Configuration for the PolyKit editor.
//!
//! Supports JSON and TOML files; the format follows the file extension.
//!
//! Configuration is organized into sections:
//! - Interaction thresholds (hit-test radius, drag threshold, zoom factors)
//! - Undo history depth
//! - Default plot colors
//! - Initial view
//! - External algorithm runner paths and default parameters

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use polykit_core::constants::{
    DEFAULT_VIEW_RANGE, DELETE_THRESHOLD, DRAG_THRESHOLD_PX, HISTORY_LIMIT, POINT_COLOR,
    POLYGON_COLOR, POLYLINE_COLOR, SCROLL_UP_ZOOM_FACTOR, SCROLL_DOWN_ZOOM_FACTOR,
};

use crate::error::{SettingsError, SettingsResult};

/// Pointer and wheel handling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Ctrl+click deletion radius in world units
    pub delete_threshold: f64,
    /// Pointer travel in pixels before a press becomes a pan
    pub drag_threshold_px: f64,
    /// Range scale applied on Ctrl+scroll up
    pub scroll_up_zoom_factor: f64,
    /// Range scale applied on Ctrl+scroll down
    pub scroll_down_zoom_factor: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            delete_threshold: DELETE_THRESHOLD,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            scroll_up_zoom_factor: SCROLL_UP_ZOOM_FACTOR,
            scroll_down_zoom_factor: SCROLL_DOWN_ZOOM_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo steps kept
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: HISTORY_LIMIT,
        }
    }
}

/// Default colors of newly created plots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub point: String,
    pub polyline: String,
    pub polygon: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            point: POINT_COLOR.to_string(),
            polyline: POLYLINE_COLOR.to_string(),
            polygon: POLYGON_COLOR.to_string(),
        }
    }
}

/// Initial view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Visible world X range as `[min, max]`
    pub x_range: [f64; 2],
    /// Visible world Y range as `[min, max]`
    pub y_range: [f64; 2],
    /// Widget width in pixels
    pub width_px: f64,
    /// Widget height in pixels
    pub height_px: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        let (min, max) = DEFAULT_VIEW_RANGE;
        Self {
            x_range: [min, max],
            y_range: [min, max],
            width_px: 1200.0,
            height_px: 800.0,
        }
    }
}

/// Default parameters handed to the path-planning algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmDefaults {
    pub flight_angle_degrees: f64,
    pub boundary_margin: f64,
    /// Margin applied to every obstacle
    pub obstacle_margin: f64,
    pub swath: f64,
    pub start_point: i64,
    pub perimter_scaled_no: i64,
    pub start_end_elongation_flag: i64,
    pub param_convention: i64,
}

impl Default for AlgorithmDefaults {
    fn default() -> Self {
        Self {
            flight_angle_degrees: 0.0,
            boundary_margin: 2.5,
            obstacle_margin: 2.0,
            swath: 4.0,
            start_point: 1,
            perimter_scaled_no: 1,
            start_end_elongation_flag: 1,
            param_convention: 0,
        }
    }
}

/// External algorithm runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Directory holding the algorithm repository; the working directory
    /// when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    /// Git repository directory, relative to the project root
    pub repository_dir: String,
    /// Script directory, relative to the repository
    pub script_dir: String,
    /// Interpreter used to run the generated driver script
    pub python: String,
    pub defaults: AlgorithmDefaults,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            project_root: None,
            repository_dir: "ga_dpp1".to_string(),
            script_dir: "dppv2".to_string(),
            python: "python".to_string(),
            defaults: AlgorithmDefaults::default(),
        }
    }
}

impl RunnerSettings {
    pub fn project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn repository_path(&self) -> PathBuf {
        self.project_root().join(&self.repository_dir)
    }

    pub fn script_path(&self) -> PathBuf {
        self.repository_path().join(&self.script_dir)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub interaction: InteractionSettings,
    pub history: HistorySettings,
    pub colors: ColorSettings,
    pub view: ViewSettings,
    pub runner: RunnerSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(Format::Json)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(Format::Toml)
    } else {
        Err(SettingsError::UnsupportedFormat(path.display().to_string()))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does
    /// not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let interaction = &self.interaction;
        if !is_positive(interaction.delete_threshold) {
            return Err(SettingsError::invalid(
                "interaction.delete_threshold",
                "must be > 0",
            ));
        }
        if !is_positive(interaction.drag_threshold_px) {
            return Err(SettingsError::invalid(
                "interaction.drag_threshold_px",
                "must be > 0",
            ));
        }
        if !is_positive(interaction.scroll_up_zoom_factor)
            || !is_positive(interaction.scroll_down_zoom_factor)
        {
            return Err(SettingsError::invalid(
                "interaction.zoom_factor",
                "zoom factors must be > 0",
            ));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid(
                "history.max_depth",
                "must be at least 1",
            ));
        }

        if !is_non_empty(self.view.x_range) || !is_non_empty(self.view.y_range) {
            return Err(SettingsError::invalid("view.range", "ranges must not be empty"));
        }
        if !is_positive(self.view.width_px) || !is_positive(self.view.height_px) {
            return Err(SettingsError::invalid("view.size", "view size must be > 0"));
        }

        if self.runner.python.trim().is_empty() {
            return Err(SettingsError::invalid("runner.python", "must not be empty"));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_empty([min, max]: [f64; 2]) -> bool {
    min.is_finite() && max.is_finite() && max > min
}

/// Default config location: `<config dir>/polykit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("No configuration directory on this platform".to_string())
    })?;
    Ok(base.join("polykit").join("config.toml"))
}
