//! Tuning parameters consumed by the geometry kernel.
//!
//! `SceneParams` carries the scene-unit constants (grid size, borders, default
//! sizes); `RenderParams` carries the nominal screen-space stroke and label
//! sizes that views divide by the current zoom.

use crate::constants;

/// Scene geometry parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Scene units per clearance unit.
    pub grid_size: f64,
    /// Exterior border of a flipped ellipse, screen pixels.
    pub ellipse_border: f64,
    /// Radius of a newly placed ellipse, screen pixels.
    pub default_radius: f64,
    /// Placement marker radius, screen pixels.
    pub marker_size: f64,
    /// Resize handle radius, screen pixels.
    pub handle_size: f64,
    /// Drone glyph half extent, scene units.
    pub drone_size: f64,
    /// Offset of duplicated items, scene units.
    pub duplicate_offset: f64,
}

impl Default for SceneParams {
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

impl SceneParams {
    /// Clearance expressed in scene units.
    pub fn clearance_offset(&self, clearance: f64) -> f64 {
        clearance * self.grid_size
    }
}

/// Nominal screen-space rendering sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub pen_width: f64,
    pub selected_pen_width: f64,
    pub clearance_pen_width: f64,
    pub port_font_size: f64,
    pub port_label_box: f64,
}

impl Default for RenderParams {
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
