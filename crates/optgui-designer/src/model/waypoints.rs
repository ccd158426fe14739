use super::{
    assert_finite_point, assert_non_negative, distance_to_segment, ConstraintModel, ModelKind,
    Point, VertexModel,
};

/// Ordered chain of waypoints the trajectory has to visit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaypointsModel {
    points: Vec<Point>,
    position: Point,
    clearance: f64,
    port: u32,
}

impl WaypointsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a waypoint; the first one also becomes the chain's anchor.
    pub fn push_point(&mut self, point: Point) {
        assert_finite_point("waypoint", point);
        if self.points.is_empty() {
            self.position = point;
        }
        self.points.push(point);
    }
}

impl ConstraintModel for WaypointsModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Waypoints
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, pos: Point) {
        assert_finite_point("position", pos);
        let (dx, dy) = (pos.x - self.position.x, pos.y - self.position.y);
        for p in &mut self.points {
            *p = p.offset(dx, dy);
        }
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
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance_to(&p) <= tolerance,
            pts => pts
                .windows(2)
                .any(|w| distance_to_segment(p, w[0], w[1]) <= tolerance),
        }
    }
}

impl VertexModel for WaypointsModel {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> Point {
        assert!(
            index < self.points.len(),
            "waypoint index out of range: {index} >= {}",
            self.points.len()
        );
        self.points[index]
    }

    fn set_point_at(&mut self, point: Point, index: usize) {
        assert!(
            index < self.points.len(),
            "waypoint index out of range: {index} >= {}",
            self.points.len()
        );
        assert_finite_point("point", point);
        self.points[index] = point;
    }
}
