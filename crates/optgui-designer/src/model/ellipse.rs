use super::{
    assert_finite_point, assert_non_negative, normalize_degrees, ConstraintModel, ModelKind,
    Point,
};

/// Elliptic keep-out region.
///
/// `width` and `height` are full extents; `rotation` is in degrees and kept
/// inside `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseModel {
    position: Point,
    width: f64,
    height: f64,
    rotation: f64,
    clearance: f64,
    port: u32,
    direction: bool,
}

impl EllipseModel {
    /// Circle of `radius` centred on `position`.
    pub fn new(position: Point, radius: f64) -> Self {
        assert_finite_point("position", position);
        assert_non_negative("radius", radius);
        Self {
            position,
            width: radius * 2.0,
            height: radius * 2.0,
            rotation: 0.0,
            clearance: 0.0,
            port: 0,
            direction: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn direction(&self) -> bool {
        self.direction
    }

    /// Half of the larger extent.
    pub fn radius(&self) -> f64 {
        self.width.max(self.height) / 2.0
    }

    pub fn set_width(&mut self, width: f64) {
        assert_non_negative("width", width);
        self.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        assert_non_negative("height", height);
        self.height = height;
    }

    /// Stores the angle wrapped into `[0, 360)`.
    pub fn set_rotation(&mut self, rotation: f64) {
        assert!(rotation.is_finite(), "rotation must be finite, got {rotation}");
        self.rotation = normalize_degrees(rotation);
    }

    /// Toggles the exterior border and returns the new state.
    pub fn flip_direction(&mut self) -> bool {
        self.direction = !self.direction;
        self.direction
    }
}

impl ConstraintModel for EllipseModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Ellipse
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, pos: Point) {
        assert_finite_point("position", pos);
        self.position = pos;
    }

    fn port(&self) -> u32 {
        self.port
    }

    fn set_port(&mut self, port: u32) {
        self.port = port;
    }

    fn clearance(&self) -> f64 {
        self.clearance
    }

    fn set_clearance(&mut self, clearance: f64) {
        assert_non_negative("clearance", clearance);
        self.clearance = clearance;
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.position.distance_to(&p) <= self.radius() + tolerance
    }
}
