//! Shared scene extent and the rule that grows it.
//!
//! Any item whose scene bounding rectangle pokes outside the scene extent
//! grows the extent to the union of the two, and the attached viewport is
//! told about the new extent. The extent never shrinks.

use tracing::debug;

use crate::bounds::Bounds;
use crate::viewport::Viewport;

/// What a view needs from whatever hosts it.
pub trait SceneHost {
    /// Current zoom of the attached display, 1.0 when none is attached.
    fn scaling_factor(&self) -> f64;

    fn scene_rect(&self) -> Bounds;

    /// Replaces the extent and propagates it to the attached display.
    fn set_scene_rect(&mut self, rect: Bounds);
}

/// Grows the host's extent so it contains `item_rect`.
///
/// Returns true when the extent changed. Calling it again with the same
/// rectangle is a no-op.
pub fn expand_scene<H: SceneHost + ?Sized>(host: &mut H, item_rect: &Bounds) -> bool {
    let rect = host.scene_rect();
    if rect.contains(item_rect) {
        return false;
    }
    let grown = rect.union(item_rect);
    debug!(
        min_x = grown.min_x,
        min_y = grown.min_y,
        max_x = grown.max_x,
        max_y = grown.max_y,
        "scene extent grown"
    );
    host.set_scene_rect(grown);
    true
}

/// Scene extent plus the optional viewport displaying it.
#[derive(Debug, Clone)]
pub struct Scene {
    rect: Bounds,
    viewport: Option<Viewport>,
}

impl Scene {
    pub fn new(rect: Bounds) -> Self {
        Self {
            rect,
            viewport: None,
        }
    }

    /// Attaches a display; it immediately receives the current extent.
    pub fn attach(&mut self, mut viewport: Viewport) {
        viewport.set_scene_rect(self.rect);
        self.viewport = Some(viewport);
    }

    pub fn detach(&mut self) -> Option<Viewport> {
        self.viewport.take()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewport.as_mut()
    }

    /// Grows the extent to cover the viewport's pixel area centred on the
    /// origin. No-op without a viewport.
    pub fn expand_to_viewport(&mut self) -> bool {
        let Some(area) = self.viewport.as_ref().map(Viewport::centered_canvas_rect) else {
            return false;
        };
        expand_scene(self, &area)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Bounds::new(-600.0, -400.0, 600.0, 400.0))
    }
}

impl SceneHost for Scene {
    fn scaling_factor(&self) -> f64 {
        self.viewport.as_ref().map_or(1.0, Viewport::zoom)
    }

    fn scene_rect(&self) -> Bounds {
        self.rect
    }

    fn set_scene_rect(&mut self, rect: Bounds) {
        self.rect = rect;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.set_scene_rect(rect);
        }
    }
}
