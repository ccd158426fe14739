//! Resize handles.
//!
//! A handle turns pointer motion into model mutations under a
//! press/drag/release protocol:
//!
//! ```text
//! Idle --primary press over handle--> Dragging
//! Dragging --pointer move--> Dragging (mutates the model)
//! Dragging --primary release | cancel--> Idle
//! ```
//!
//! Handles never own their model. They carry the item id and look the model
//! up in the [`ModelStore`] on every move; the owning view supplies the scene
//! position of the pointer and of the item's anchor.

use optgui_core::{GeometryError, Result};
use tracing::{debug, trace};

use crate::model::{line_angle, normalize_degrees, Point};
use crate::store::{ItemId, ModelStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Which ellipse extent an ellipse handle drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Width,
    Height,
    /// Width and height together; the ellipse stays circular.
    Both,
}

impl HandleKind {
    /// Angle between the handle's resting direction and the width axis.
    pub fn rotation_offset(self) -> f64 {
        match self {
            HandleKind::Width => 0.0,
            HandleKind::Height => -90.0,
            HandleKind::Both => -45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleTarget {
    Ellipse(HandleKind),
    Vertex { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    Dragging,
}

/// Result of one ellipse handle drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseDrag {
    /// Distance from pointer to anchor; written to width and/or height.
    pub length: f64,
    /// New rotation in `[0, 360)`.
    pub rotation: f64,
}

/// Width/height and rotation implied by a pointer at `pointer` for an
/// ellipse anchored at `anchor`.
pub fn ellipse_drag(pointer: Point, anchor: Point, kind: HandleKind) -> EllipseDrag {
    let length = pointer.distance_to(&anchor);
    let angle = line_angle(pointer, anchor);
    EllipseDrag {
        length,
        rotation: normalize_degrees(360.0 - angle + kind.rotation_offset()),
    }
}

#[derive(Debug, Clone)]
pub struct ResizeHandle {
    item: ItemId,
    target: HandleTarget,
    state: HandleState,
    /// Position relative to the owning view's origin, unrotated.
    position: Point,
    visible: bool,
}

impl ResizeHandle {
    pub fn new(item: ItemId, target: HandleTarget) -> Self {
        Self {
            item,
            target,
            state: HandleState::Idle,
            position: Point::default(),
            visible: false,
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn target(&self) -> HandleTarget {
        self.target
    }

    /// Vertex index for point handles.
    pub fn index(&self) -> Option<usize> {
        match self.target {
            HandleTarget::Vertex { index } => Some(index),
            HandleTarget::Ellipse(_) => None,
        }
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == HandleState::Dragging
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// True when a visible handle of radius `radius` covers `local`.
    pub fn hit(&self, local: Point, radius: f64) -> bool {
        self.visible && self.position.distance_to(&local) <= radius
    }

    /// Starts a drag on a primary press over a visible handle.
    pub fn press(&mut self, button: PointerButton, over: bool) -> bool {
        if button != PointerButton::Primary || !over || !self.visible {
            return false;
        }
        self.state = HandleState::Dragging;
        debug!(item = self.item, target = ?self.target, "handle drag started");
        true
    }

    /// Ends the drag on a primary release, wherever the pointer is.
    pub fn release(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary || !self.is_dragging() {
            return false;
        }
        self.state = HandleState::Idle;
        debug!(item = self.item, target = ?self.target, "handle drag finished");
        true
    }

    /// Drops back to idle without a release. Mutations already applied stay.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.state = HandleState::Idle;
            debug!(item = self.item, "handle drag cancelled");
        }
    }

    /// Applies one drag step to the model.
    ///
    /// Returns `Ok(false)` when the handle is idle, an error when the item is
    /// gone from the store.
    ///
    /// # Panics
    /// If the handle target does not match the model kind, or the vertex
    /// index is out of range.
    pub fn drag_to(&self, store: &mut ModelStore, pointer: Point, anchor: Point) -> Result<bool> {
        if !self.is_dragging() {
            return Ok(false);
        }
        let model = store
            .get_mut(self.item)
            .ok_or(GeometryError::UnknownItem { id: self.item })?;

        match self.target {
            HandleTarget::Ellipse(kind) => {
                let drag = ellipse_drag(pointer, anchor, kind);
                let ellipse = model
                    .as_ellipse_mut()
                    .unwrap_or_else(|| panic!("ellipse handle bound to a non-ellipse item {}", self.item));
                match kind {
                    HandleKind::Width => ellipse.set_width(drag.length),
                    HandleKind::Height => ellipse.set_height(drag.length),
                    HandleKind::Both => {
                        ellipse.set_width(drag.length);
                        ellipse.set_height(drag.length);
                    }
                }
                ellipse.set_rotation(drag.rotation);
                trace!(
                    item = self.item,
                    length = drag.length,
                    rotation = drag.rotation,
                    "ellipse handle moved"
                );
            }
            HandleTarget::Vertex { index } => {
                let vertices = model
                    .as_vertex_model_mut()
                    .unwrap_or_else(|| panic!("vertex handle bound to item {} without vertices", self.item));
                vertices.set_point_at(pointer, index);
                trace!(item = self.item, index, x = pointer.x, y = pointer.y, "vertex handle moved");
            }
        }
        Ok(true)
    }
}
