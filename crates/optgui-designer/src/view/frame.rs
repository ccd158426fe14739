//! Render output of one view repaint.
//!
//! Paths are in the view's local coordinates: translate by `position`, then
//! rotate by `rotation` degrees (clockwise on screen) to reach the scene.

use lyon::algorithms::aabb::fast_bounding_box;
use lyon::math::point;
use lyon::path::Path;

use crate::bounds::Bounds;
use crate::model::{ModelKind, Point};
use crate::store::ItemId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub dashed: bool,
}

impl Stroke {
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            dashed: false,
        }
    }

    pub fn dashed(width: f64) -> Self {
        Self {
            width,
            dashed: true,
        }
    }
}

/// Fill/outline colour role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Obstacle,
    Region,
    Constraint,
    Waypoint,
    Feasible,
    Infeasible,
}

#[derive(Debug, Clone)]
pub struct StrokedPath {
    pub path: Path,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleFrame {
    pub center: Point,
    pub radius: f64,
    pub stroke: Stroke,
    pub index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortLabel {
    pub text: String,
    pub center: Point,
    pub font_size: f64,
    /// Half extent of the box the text is centred in.
    pub half_box: f64,
}

#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub id: ItemId,
    pub kind: ModelKind,
    pub position: Point,
    pub rotation: f64,
    pub selected: bool,
    pub outline: StrokedPath,
    pub clearance: Option<StrokedPath>,
    pub border: Option<StrokedPath>,
    /// Extra decorations such as waypoint markers.
    pub markers: Vec<Path>,
    pub handles: Vec<HandleFrame>,
    pub label: Option<PortLabel>,
    /// Scene bounding rectangle at paint time.
    pub bounds: Bounds,
    pub tone: Tone,
}

impl RenderFrame {
    /// True when the primary outline has no geometry.
    pub fn is_empty(&self) -> bool {
        self.outline.path.iter().next().is_none()
    }
}

pub(crate) fn circle_path(center: Point, radius: f64) -> Path {
    if radius <= 0.0 {
        return Path::new();
    }
    let mut builder = Path::builder();
    builder.add_circle(
        point(center.x as f32, center.y as f32),
        radius as f32,
        lyon::path::Winding::Positive,
    );
    builder.build()
}

/// Conservative bounds of every segment and control point, `None` for an
/// empty path.
pub(crate) fn path_bounds(path: &Path) -> Option<Bounds> {
    path.iter().next()?;
    let b = fast_bounding_box(path.iter());
    Some(Bounds::new(
        b.min.x as f64,
        b.min.y as f64,
        b.max.x as f64,
        b.max.y as f64,
    ))
}

/// Polyline through `points`, closed when `close` is set. Fewer than two
/// points yield an empty path.
pub(crate) fn polyline_path(points: &[Point], close: bool) -> Path {
    if points.len() < 2 {
        return Path::new();
    }
    let mut builder = Path::builder();
    for (i, p) in points.iter().enumerate() {
        let p = point(p.x as f32, p.y as f32);
        if i == 0 {
            builder.begin(p);
        } else {
            builder.line_to(p);
        }
    }
    if close {
        builder.close();
    } else {
        builder.end(false);
    }
    builder.build()
}
