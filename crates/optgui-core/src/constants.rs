//! Scene and rendering constants.
//!
//! These are the defaults; the settings crate can override every one of them
//! through [`crate::params::SceneParams`] and [`crate::params::RenderParams`].

/// Scene units per clearance unit (one grid cell).
pub const GRID_SIZE: f64 = 100.0;

/// Extra exterior border drawn around a flipped ellipse, in screen pixels.
pub const ELLIPSE_BORDER: f64 = 10.0;

/// Radius of a freshly placed ellipse, in screen pixels.
pub const DEFAULT_RADIUS: f64 = 80.0;

/// Radius of the temporary placement markers, in screen pixels.
pub const MARKER_SIZE: f64 = 14.0;

/// Radius of a resize handle disc, in screen pixels.
pub const HANDLE_SIZE: f64 = 8.0;

/// Half extent of a drone glyph, in scene units.
pub const DRONE_SIZE: f64 = 20.0;

/// Outline width for unselected items, in screen pixels.
pub const PEN_WIDTH: f64 = 1.0;

/// Outline width for selected items, in screen pixels.
pub const SELECTED_PEN_WIDTH: f64 = 3.0;

/// Width of the dashed clearance ring, in screen pixels.
pub const CLEARANCE_PEN_WIDTH: f64 = 3.0;

/// Point size of the port label.
pub const PORT_FONT_SIZE: f64 = 12.0;

/// Half extent of the box the port label is centred in.
pub const PORT_LABEL_BOX: f64 = 50.0;

/// Zoom limits for the hosting viewport.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

/// Offset applied to duplicated items, in scene units.
pub const DUPLICATE_OFFSET: f64 = 20.0;
