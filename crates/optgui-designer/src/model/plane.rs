use super::{
    assert_finite_point, assert_non_negative, distance_to_segment, ConstraintModel, ModelKind,
    Point, VertexModel,
};

/// Half-plane constraint given by two points on its boundary line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneModel {
    p1: Point,
    p2: Point,
    clearance: f64,
    port: u32,
}

impl PlaneModel {
    pub fn new(p1: Point, p2: Point) -> Self {
        assert_finite_point("p1", p1);
        assert_finite_point("p2", p2);
        Self {
            p1,
            p2,
            clearance: 0.0,
            port: 0,
        }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }
}

impl ConstraintModel for PlaneModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Plane
    }

    /// Midpoint of the two endpoints.
    fn position(&self) -> Point {
        Point::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }

    fn set_position(&mut self, pos: Point) {
        assert_finite_point("position", pos);
        let mid = self.position();
        let (dx, dy) = (pos.x - mid.x, pos.y - mid.y);
        self.p1 = self.p1.offset(dx, dy);
        self.p2 = self.p2.offset(dx, dy);
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
        distance_to_segment(p, self.p1, self.p2) <= tolerance
    }
}

impl VertexModel for PlaneModel {
    fn point_count(&self) -> usize {
        2
    }

    fn point_at(&self, index: usize) -> Point {
        match index {
            0 => self.p1,
            1 => self.p2,
            _ => panic!("plane index out of range: {index} >= 2"),
        }
    }

    fn set_point_at(&mut self, point: Point, index: usize) {
        assert_finite_point("point", point);
        match index {
            0 => self.p1 = point,
            1 => self.p2 = point,
            _ => panic!("plane index out of range: {index} >= 2"),
        }
    }
}
