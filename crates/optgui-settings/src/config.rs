//! Configuration for OptGUI
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Scene geometry (grid size, default sizes of new items)
//! - View (zoom limits, initial viewport size)
//! - Rendering (nominal stroke widths and port label sizes)

use optgui_core::{constants, RenderParams, SceneParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Scene geometry settings, in scene units unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Scene units per clearance unit
    pub grid_size: f64,
    /// Exterior border of a flipped ellipse (screen pixels)
    pub ellipse_border: f64,
    /// Radius of a newly placed ellipse (screen pixels)
    pub default_radius: f64,
    /// Placement marker radius (screen pixels)
    pub marker_size: f64,
    /// Resize handle radius (screen pixels)
    pub handle_size: f64,
    /// Drone half extent, scene units
    pub drone_size: f64,
    /// Offset of duplicated items
    pub duplicate_offset: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            grid_size: constants::GRID_SIZE,
            ellipse_border: constants::ELLIPSE_BORDER,
            default_radius: constants::DEFAULT_RADIUS,
            marker_size: constants::MARKER_SIZE,
            handle_size: constants::HANDLE_SIZE,
            drone_size: constants::DRONE_SIZE,
            duplicate_offset: constants::DUPLICATE_OFFSET,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Viewport width in pixels
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            initial_zoom: 1.0,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            viewport_width: 1200.0,
            viewport_height: 800.0,
        }
    }
}

/// Nominal rendering sizes, divided by the zoom at paint time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub pen_width: f64,
    pub selected_pen_width: f64,
    pub clearance_pen_width: f64,
    pub port_font_size: f64,
    pub port_label_box: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pen_width: constants::PEN_WIDTH,
            selected_pen_width: constants::SELECTED_PEN_WIDTH,
            clearance_pen_width: constants::CLEARANCE_PEN_WIDTH,
            port_font_size: constants::PORT_FONT_SIZE,
            port_label_box: constants::PORT_LABEL_BOX,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scene: SceneSettings,
    pub view: ViewSettings,
    pub render: RenderSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/optgui/config.toml`.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("optgui").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
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
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let s = &self.scene;
        require_positive("scene.grid_size", s.grid_size)?;
        require_positive("scene.default_radius", s.default_radius)?;
        require_positive("scene.marker_size", s.marker_size)?;
        require_positive("scene.handle_size", s.handle_size)?;
        require_positive("scene.drone_size", s.drone_size)?;
        if !(s.ellipse_border.is_finite() && s.ellipse_border >= 0.0) {
            return Err(ConfigError::out_of_range("scene.ellipse_border", s.ellipse_border));
        }
        if !s.duplicate_offset.is_finite() {
            return Err(ConfigError::out_of_range("scene.duplicate_offset", s.duplicate_offset));
        }

        let v = &self.view;
        require_positive("view.min_zoom", v.min_zoom)?;
        require_positive("view.max_zoom", v.max_zoom)?;
        if v.min_zoom > v.max_zoom {
            return Err(ConfigError::out_of_range(
                "view.min_zoom",
                format!("{} > max_zoom {}", v.min_zoom, v.max_zoom),
            ));
        }
        if !(v.min_zoom..=v.max_zoom).contains(&v.initial_zoom) {
            return Err(ConfigError::out_of_range("view.initial_zoom", v.initial_zoom));
        }
        require_positive("view.viewport_width", v.viewport_width)?;
        require_positive("view.viewport_height", v.viewport_height)?;

        let r = &self.render;
        require_positive("render.pen_width", r.pen_width)?;
        require_positive("render.selected_pen_width", r.selected_pen_width)?;
        require_positive("render.clearance_pen_width", r.clearance_pen_width)?;
        require_positive("render.port_font_size", r.port_font_size)?;
        require_positive("render.port_label_box", r.port_label_box)?;

        Ok(())
    }

    /// Scene parameters for the geometry kernel.
    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            grid_size: self.scene.grid_size,
            ellipse_border: self.scene.ellipse_border,
            default_radius: self.scene.default_radius,
            marker_size: self.scene.marker_size,
            handle_size: self.scene.handle_size,
            drone_size: self.scene.drone_size,
            duplicate_offset: self.scene.duplicate_offset,
        }
    }

    /// Rendering parameters for the views.
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            pen_width: self.render.pen_width,
            selected_pen_width: self.render.selected_pen_width,
            clearance_pen_width: self.render.clearance_pen_width,
            port_font_size: self.render.port_font_size,
            port_label_box: self.render.port_label_box,
        }
    }
}
