//! Shape views: the on-screen side of a model.
//!
//! A [`ShapeView`] reads its model on every repaint and derives what to draw:
//! outline, clearance ring, zoom-scaled strokes and handles. It never keeps
//! geometry of its own beyond render caches (stroke width, last scaling
//! factor) and the position/rotation copied from the model at the last sync.
//!
//! Every repaint and every mutation ends with a scene bounds check, see
//! [`crate::scene::expand_scene`].

pub mod ellipse;
mod drone;
pub mod frame;
mod plane;
mod polygon;
mod waypoints;

use lyon::path::Path;
use optgui_core::{GeometryError, RenderParams, Result, SceneParams};
use smallvec::SmallVec;
use tracing::debug;

pub use frame::{HandleFrame, PortLabel, RenderFrame, Stroke, StrokedPath, Tone};
pub use polygon::clearance_ring;

use crate::bounds::Bounds;
use crate::handle::{HandleKind, HandleTarget, PointerButton, ResizeHandle};
use crate::model::{rotate_point, ConstraintModel, GeometryModel, ModelKind, Point};
use crate::scene::{expand_scene, SceneHost};
use crate::store::{ItemId, ModelStore};

/// Inputs shared by the per-kind paint functions.
#[derive(Debug, Clone, Copy)]
pub struct PaintContext {
    pub scaling: f64,
    pub scene: SceneParams,
    pub render: RenderParams,
    pub selected: bool,
}

pub(crate) struct KindPaint {
    outline: Path,
    clearance: Option<StrokedPath>,
    border: Option<StrokedPath>,
    markers: Vec<Path>,
    tone: Tone,
}

fn to_local(points: &[Point], origin: Point) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x - origin.x, p.y - origin.y))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ShapeView {
    id: ItemId,
    kind: ModelKind,
    handles: SmallVec<[ResizeHandle; 4]>,
    selected: bool,
    pos: Point,
    rotation: f64,
    scene_params: SceneParams,
    render_params: RenderParams,
    pen_width: f64,
    scaling_factor: f64,
    repaint_requested: bool,
}

impl ShapeView {
    pub fn new(
        id: ItemId,
        model: &GeometryModel,
        scene_params: SceneParams,
        render_params: RenderParams,
    ) -> Self {
        let mut view = Self {
            id,
            kind: model.kind(),
            handles: SmallVec::new(),
            selected: false,
            pos: model.position(),
            rotation: 0.0,
            scene_params,
            render_params,
            pen_width: render_params.pen_width,
            scaling_factor: 1.0,
            repaint_requested: true,
        };
        view.sync(model);
        view
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn handles(&self) -> &[ResizeHandle] {
        &self.handles
    }

    /// Handles currently shown.
    pub fn visible_handles(&self) -> impl Iterator<Item = &ResizeHandle> {
        self.handles.iter().filter(|h| h.is_visible())
    }

    /// Outline stroke width at the last repaint.
    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    /// Scaling factor seen at the last repaint.
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    fn context(&self, scaling: f64) -> PaintContext {
        PaintContext {
            scaling,
            scene: self.scene_params,
            render: self.render_params,
            selected: self.selected,
        }
    }

    fn required_targets(model: &GeometryModel) -> SmallVec<[HandleTarget; 4]> {
        match model {
            GeometryModel::Ellipse(_) => {
                smallvec::smallvec![HandleTarget::Ellipse(HandleKind::Both)]
            }
            GeometryModel::Drone(_) => SmallVec::new(),
            other => (0..other.point_count())
                .map(|index| HandleTarget::Vertex { index })
                .collect(),
        }
    }

    /// Copies position and rotation from the model and lays out the handles,
    /// rebuilding them when the required set changed.
    ///
    /// # Panics
    /// If `model` is of a different kind than the one the view was built for.
    pub fn sync(&mut self, model: &GeometryModel) {
        assert_eq!(
            model.kind(),
            self.kind,
            "view {} is a {} view, got a {} model",
            self.id,
            self.kind,
            model.kind()
        );
        self.pos = model.position();
        self.rotation = model.as_ellipse().map_or(0.0, |e| e.rotation());

        let targets = Self::required_targets(model);
        let unchanged = self.handles.len() == targets.len()
            && self.handles.iter().zip(&targets).all(|(h, t)| h.target() == *t);
        if !unchanged {
            debug!(item = self.id, count = targets.len(), "rebuilding handles");
            self.handles = targets
                .into_iter()
                .map(|t| ResizeHandle::new(self.id, t))
                .collect();
        }

        let pos = self.pos;
        let selected = self.selected;
        for handle in &mut self.handles {
            let local = match (handle.target(), model) {
                (HandleTarget::Ellipse(_), GeometryModel::Ellipse(e)) => {
                    Point::new(-e.radius(), 0.0)
                }
                (HandleTarget::Vertex { index }, m) => match m.as_vertex_model() {
                    Some(vertices) => {
                        let p = vertices.point_at(index);
                        Point::new(p.x - pos.x, p.y - pos.y)
                    }
                    None => Point::default(),
                },
                _ => Point::default(),
            };
            handle.set_position(local);
            handle.set_visible(selected);
        }
    }

    /// Region the view may paint into, in local coordinates.
    pub fn bounding_rect(&self, model: &GeometryModel, scaling: f64) -> Bounds {
        let ctx = self.context(scaling);
        match model {
            GeometryModel::Ellipse(m) => ellipse::local_bounds(m, &ctx),
            GeometryModel::Polygon(m) => polygon::local_bounds(m, self.pos, &ctx),
            GeometryModel::Plane(m) => plane::local_bounds(m, self.pos, &ctx),
            GeometryModel::Waypoints(m) => waypoints::local_bounds(m, self.pos, &ctx),
            GeometryModel::Drone(m) => drone::local_bounds(m, &ctx),
        }
    }

    /// Bounding rectangle in scene coordinates.
    ///
    /// Ellipse bounds are a circle about the centre, so rotation does not
    /// change them; other kinds are never rotated.
    pub fn scene_bounding_rect(&self, model: &GeometryModel, scaling: f64) -> Bounds {
        self.bounding_rect(model, scaling)
            .translate(self.pos.x, self.pos.y)
    }

    pub fn map_to_scene(&self, local: Point) -> Point {
        let rotated = rotate_point(local, Point::default(), self.rotation);
        rotated.offset(self.pos.x, self.pos.y)
    }

    pub fn map_from_scene(&self, scene: Point) -> Point {
        let local = Point::new(scene.x - self.pos.x, scene.y - self.pos.y);
        rotate_point(local, Point::default(), -self.rotation)
    }

    /// Grows the host's extent to cover this view.
    pub fn expand_scene<H: SceneHost + ?Sized>(&self, model: &GeometryModel, host: &mut H) -> bool {
        let rect = self.scene_bounding_rect(model, host.scaling_factor());
        expand_scene(host, &rect)
    }

    /// Builds the frame for the current model state.
    pub fn paint<H: SceneHost + ?Sized>(&mut self, model: &GeometryModel, host: &mut H) -> RenderFrame {
        let scaling = host.scaling_factor();
        self.scaling_factor = scaling;
        self.sync(model);

        let nominal = if self.selected {
            self.render_params.selected_pen_width
        } else {
            self.render_params.pen_width
        };
        self.pen_width = nominal / scaling;

        let ctx = self.context(scaling);
        let painted = match model {
            GeometryModel::Ellipse(m) => ellipse::paint(m, &ctx),
            GeometryModel::Polygon(m) => polygon::paint(m, self.pos, &ctx),
            GeometryModel::Plane(m) => plane::paint(m, self.pos, &ctx),
            GeometryModel::Waypoints(m) => waypoints::paint(m, self.pos, &ctx),
            GeometryModel::Drone(m) => drone::paint(m, &ctx),
        };

        let handle_radius = self.scene_params.handle_size / scaling;
        let handle_stroke = Stroke::solid(self.render_params.pen_width / scaling);
        let handles = self
            .visible_handles()
            .map(|h| HandleFrame {
                center: h.position(),
                radius: handle_radius,
                stroke: handle_stroke,
                index: h.index(),
            })
            .collect();

        let label = (model.port() != 0).then(|| PortLabel {
            text: model.port().to_string(),
            center: Point::default(),
            font_size: self.render_params.port_font_size / scaling,
            half_box: self.render_params.port_label_box / scaling,
        });

        let bounds = self.scene_bounding_rect(model, scaling);
        expand_scene(host, &bounds);
        self.repaint_requested = false;

        RenderFrame {
            id: self.id,
            kind: self.kind,
            position: self.pos,
            rotation: self.rotation,
            selected: self.selected,
            outline: StrokedPath {
                path: painted.outline,
                stroke: Stroke::solid(self.pen_width),
            },
            clearance: painted.clearance,
            border: painted.border,
            markers: painted.markers,
            handles,
            label,
            bounds,
            tone: painted.tone,
        }
    }

    /// Shows or hides the handles. Deselecting cancels any drag in progress.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        for handle in &mut self.handles {
            if !selected {
                handle.cancel();
            }
            handle.set_visible(selected);
        }
        self.request_repaint();
    }

    /// Offers a press at `scene` to the handles; true when one started a drag.
    pub fn pointer_press(&mut self, button: PointerButton, scene: Point, scaling: f64) -> bool {
        let local = self.map_from_scene(scene);
        let radius = self.scene_params.handle_size / scaling;
        self.handles
            .iter_mut()
            .any(|h| {
                let over = h.hit(local, radius);
                h.press(button, over)
            })
    }

    /// Forwards a pointer move to the dragging handle, then re-syncs, checks
    /// the scene bounds and requests a repaint.
    ///
    /// Returns `Ok(false)` when no handle is dragging.
    pub fn pointer_move<H: SceneHost + ?Sized>(
        &mut self,
        store: &mut ModelStore,
        host: &mut H,
        scene: Point,
    ) -> Result<bool> {
        let Some(handle) = self.handles.iter().find(|h| h.is_dragging()) else {
            return Ok(false);
        };
        if !handle.drag_to(store, scene, self.pos)? {
            return Ok(false);
        }
        let model = store
            .get(self.id)
            .ok_or(GeometryError::UnknownItem { id: self.id })?;
        self.on_geometry_changed(model, host);
        Ok(true)
    }

    pub fn pointer_release(&mut self, button: PointerButton) -> bool {
        let mut released = false;
        for handle in &mut self.handles {
            released |= handle.release(button);
        }
        released
    }

    /// Ends any drag without a release.
    pub fn focus_lost(&mut self) {
        for handle in &mut self.handles {
            handle.cancel();
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.handles.iter().any(ResizeHandle::is_dragging)
    }

    /// Re-reads the model after a mutation from outside the view.
    pub fn on_geometry_changed<H: SceneHost + ?Sized>(
        &mut self,
        model: &GeometryModel,
        host: &mut H,
    ) -> bool {
        self.sync(model);
        let grown = self.expand_scene(model, host);
        self.request_repaint();
        grown
    }

    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    /// Returns and clears the pending repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
}
