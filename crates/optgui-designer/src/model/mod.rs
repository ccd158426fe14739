use serde::{Deserialize, Serialize};

mod drone;
mod ellipse;
mod plane;
mod polygon;
mod waypoints;

pub use drone::DroneModel;
pub use ellipse::EllipseModel;
pub use plane::PlaneModel;
pub use polygon::PolygonModel;
pub use waypoints::WaypointsModel;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rotates `p` about `center` by `angle_deg`, clockwise on a y-down screen.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Wraps any angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Angle of the line `from -> to` in degrees, counter-clockwise from the
/// +X axis as seen on a y-down screen, in `[0, 360)`.
pub fn line_angle(from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    normalize_degrees((-dy).atan2(dx).to_degrees())
}

/// Distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Mean of the points, `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

pub(crate) fn assert_finite_point(name: &str, p: Point) {
    assert!(p.is_finite(), "{name} must be finite, got {p:?}");
}

pub(crate) fn assert_non_negative(name: &str, value: f64) {
    assert!(
        value.is_finite() && value >= 0.0,
        "{name} must be non-negative and finite, got {value}"
    );
}

/// Closed set of item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Ellipse,
    Polygon,
    Plane,
    Waypoints,
    Drone,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ellipse => write!(f, "ellipse"),
            Self::Polygon => write!(f, "polygon"),
            Self::Plane => write!(f, "plane"),
            Self::Waypoints => write!(f, "waypoints"),
            Self::Drone => write!(f, "drone"),
        }
    }
}

/// Attributes every constraint model exposes.
pub trait ConstraintModel {
    fn kind(&self) -> ModelKind;

    fn position(&self) -> Point;

    /// Moves the item so its anchor lands on `pos`.
    ///
    /// # Panics
    /// If `pos` is not finite.
    fn set_position(&mut self, pos: Point);

    fn port(&self) -> u32;

    fn set_port(&mut self, port: u32);

    /// Safety margin in grid units.
    fn clearance(&self) -> f64;

    /// # Panics
    /// If `clearance` is negative or not finite.
    fn set_clearance(&mut self, clearance: f64);

    fn contains_point(&self, p: Point, tolerance: f64) -> bool;

    fn translate(&mut self, dx: f64, dy: f64) {
        let p = self.position();
        self.set_position(p.offset(dx, dy));
    }
}

/// Models whose extent is an ordered list of draggable points.
pub trait VertexModel {
    fn point_count(&self) -> usize;

    /// # Panics
    /// If `index >= point_count()`.
    fn point_at(&self, index: usize) -> Point;

    /// # Panics
    /// If `index >= point_count()` or `point` is not finite.
    fn set_point_at(&mut self, point: Point, index: usize);
}

#[derive(Debug, Clone)]
pub enum GeometryModel {
    Ellipse(EllipseModel),
    Polygon(PolygonModel),
    Plane(PlaneModel),
    Waypoints(WaypointsModel),
    Drone(DroneModel),
}

impl ConstraintModel for GeometryModel {
    fn kind(&self) -> ModelKind {
        match self {
            GeometryModel::Ellipse(m) => m.kind(),
            GeometryModel::Polygon(m) => m.kind(),
            GeometryModel::Plane(m) => m.kind(),
            GeometryModel::Waypoints(m) => m.kind(),
            GeometryModel::Drone(m) => m.kind(),
        }
    }

    fn position(&self) -> Point {
        match self {
            GeometryModel::Ellipse(m) => m.position(),
            GeometryModel::Polygon(m) => m.position(),
            GeometryModel::Plane(m) => m.position(),
            GeometryModel::Waypoints(m) => m.position(),
            GeometryModel::Drone(m) => m.position(),
        }
    }

    fn set_position(&mut self, pos: Point) {
        match self {
            GeometryModel::Ellipse(m) => m.set_position(pos),
            GeometryModel::Polygon(m) => m.set_position(pos),
            GeometryModel::Plane(m) => m.set_position(pos),
            GeometryModel::Waypoints(m) => m.set_position(pos),
            GeometryModel::Drone(m) => m.set_position(pos),
        }
    }

    fn port(&self) -> u32 {
        match self {
            GeometryModel::Ellipse(m) => m.port(),
            GeometryModel::Polygon(m) => m.port(),
            GeometryModel::Plane(m) => m.port(),
            GeometryModel::Waypoints(m) => m.port(),
            GeometryModel::Drone(m) => m.port(),
        }
    }

    fn set_port(&mut self, port: u32) {
        match self {
            GeometryModel::Ellipse(m) => m.set_port(port),
            GeometryModel::Polygon(m) => m.set_port(port),
            GeometryModel::Plane(m) => m.set_port(port),
            GeometryModel::Waypoints(m) => m.set_port(port),
            GeometryModel::Drone(m) => m.set_port(port),
        }
    }

    fn clearance(&self) -> f64 {
        match self {
            GeometryModel::Ellipse(m) => m.clearance(),
            GeometryModel::Polygon(m) => m.clearance(),
            GeometryModel::Plane(m) => m.clearance(),
            GeometryModel::Waypoints(m) => m.clearance(),
            GeometryModel::Drone(m) => m.clearance(),
        }
    }

    fn set_clearance(&mut self, clearance: f64) {
        match self {
            GeometryModel::Ellipse(m) => m.set_clearance(clearance),
            GeometryModel::Polygon(m) => m.set_clearance(clearance),
            GeometryModel::Plane(m) => m.set_clearance(clearance),
            GeometryModel::Waypoints(m) => m.set_clearance(clearance),
            GeometryModel::Drone(m) => m.set_clearance(clearance),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            GeometryModel::Ellipse(m) => m.contains_point(p, tolerance),
            GeometryModel::Polygon(m) => m.contains_point(p, tolerance),
            GeometryModel::Plane(m) => m.contains_point(p, tolerance),
            GeometryModel::Waypoints(m) => m.contains_point(p, tolerance),
            GeometryModel::Drone(m) => m.contains_point(p, tolerance),
        }
    }
}

impl GeometryModel {
    /// Point-list view of the model, `None` for ellipses and drones.
    pub fn as_vertex_model(&self) -> Option<&dyn VertexModel> {
        match self {
            GeometryModel::Polygon(m) => Some(m),
            GeometryModel::Plane(m) => Some(m),
            GeometryModel::Waypoints(m) => Some(m),
            GeometryModel::Ellipse(_) | GeometryModel::Drone(_) => None,
        }
    }

    pub fn as_vertex_model_mut(&mut self) -> Option<&mut dyn VertexModel> {
        match self {
            GeometryModel::Polygon(m) => Some(m),
            GeometryModel::Plane(m) => Some(m),
            GeometryModel::Waypoints(m) => Some(m),
            GeometryModel::Ellipse(_) | GeometryModel::Drone(_) => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&EllipseModel> {
        match self {
            GeometryModel::Ellipse(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_ellipse_mut(&mut self) -> Option<&mut EllipseModel> {
        match self {
            GeometryModel::Ellipse(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonModel> {
        match self {
            GeometryModel::Polygon(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_waypoints_mut(&mut self) -> Option<&mut WaypointsModel> {
        match self {
            GeometryModel::Waypoints(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_drone(&self) -> Option<&DroneModel> {
        match self {
            GeometryModel::Drone(m) => Some(m),
            _ => None,
        }
    }

    /// Number of vertex handles the model needs.
    pub fn point_count(&self) -> usize {
        self.as_vertex_model().map_or(0, |m| m.point_count())
    }

    /// Copy suitable for a duplicate action: same geometry, unbound port,
    /// fresh feasibility cell for drones.
    pub fn duplicate(&self) -> GeometryModel {
        let mut copy = match self {
            GeometryModel::Drone(m) => GeometryModel::Drone(m.detached_copy()),
            other => other.clone(),
        };
        copy.set_port(0);
        copy
    }
}
