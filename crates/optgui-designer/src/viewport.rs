//! Viewport and coordinate transformation for the canvas.
//!
//! Converts between pixel coordinates (screen space) and scene coordinates.
//! Both spaces have +Y pointing down, so the mapping is a plain scale and
//! translation. The viewport also mirrors the scene extent it displays,
//! which the scene pushes to it whenever the extent grows.

use std::fmt;

use optgui_core::constants::{MAX_ZOOM, MIN_ZOOM};

use crate::bounds::Bounds;
use crate::model::Point;

/// Zoom and pan state of the widget displaying the scene.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    /// Pixel position of the scene origin.
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    scene_rect: Bounds,
}

impl Viewport {
    /// Creates a viewport with the scene origin at the canvas centre.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            pan_x: canvas_width / 2.0,
            pan_y: canvas_height / 2.0,
            canvas_width,
            canvas_height,
            scene_rect: Bounds::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Replaces the zoom limits; the current zoom is clamped into them.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        assert!(
            min_zoom > 0.0 && min_zoom <= max_zoom,
            "zoom limits must satisfy 0 < min <= max, got {min_zoom}..{max_zoom}"
        );
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Current zoom level (1.0 = 100%), also the scaling factor items use.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level. Values outside the limits are ignored.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if zoom >= self.min_zoom && zoom <= self.max_zoom {
            self.zoom = zoom;
            true
        } else {
            false
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom * 1.2)
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// ```text
    /// scene = (pixel - pan) / zoom
    /// ```
    pub fn pixel_to_scene(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    pub fn scene_to_pixel(&self, point: &Point) -> (f64, f64) {
        (
            point.x * self.zoom + self.pan_x,
            point.y * self.zoom + self.pan_y,
        )
    }

    /// Scene area currently on screen.
    pub fn visible_scene_rect(&self) -> Bounds {
        let top_left = self.pixel_to_scene(0.0, 0.0);
        let bottom_right = self.pixel_to_scene(self.canvas_width, self.canvas_height);
        Bounds::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Pixel-sized rectangle centred on the scene origin.
    pub fn centered_canvas_rect(&self) -> Bounds {
        Bounds::new(
            -self.canvas_width / 2.0,
            -self.canvas_height / 2.0,
            self.canvas_width / 2.0,
            self.canvas_height / 2.0,
        )
    }

    /// Scene extent the viewport scrolls over.
    pub fn scene_rect(&self) -> Bounds {
        self.scene_rect
    }

    pub fn set_scene_rect(&mut self, rect: Bounds) {
        self.scene_rect = rect;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
