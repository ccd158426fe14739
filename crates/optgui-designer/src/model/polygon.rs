use super::{
    assert_finite_point, assert_non_negative, centroid, distance_to_segment, ConstraintModel,
    ModelKind, Point, VertexModel,
};

/// Closed keep-in/keep-out region given by its vertices in scene coordinates.
///
/// The polygon's `position` is an anchor that starts at the vertex centroid
/// and moves together with the vertices; editing a single vertex leaves it in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonModel {
    points: Vec<Point>,
    position: Point,
    clearance: f64,
    port: u32,
}

impl PolygonModel {
    /// # Panics
    /// If any point is not finite.
    pub fn new(points: Vec<Point>) -> Self {
        for p in &points {
            assert_finite_point("point", *p);
        }
        let position = centroid(&points).unwrap_or_default();
        Self {
            points,
            position,
            clearance: 0.0,
            port: 0,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// A polygon bounds a region once it has at least three vertices.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 3
    }

    fn ray_cast(&self, p: Point) -> bool {
        let mut inside = false;
        let n = self.points.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl ConstraintModel for PolygonModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Polygon
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, pos: Point) {
        assert_finite_point("position", pos);
        let dx = pos.x - self.position.x;
        let dy = pos.y - self.position.y;
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
        if !self.is_closed() {
            return false;
        }
        if self.ray_cast(p) {
            return true;
        }
        let n = self.points.len();
        (0..n).any(|i| distance_to_segment(p, self.points[i], self.points[(i + 1) % n]) <= tolerance)
    }
}

impl VertexModel for PolygonModel {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> Point {
        assert!(
            index < self.points.len(),
            "polygon index out of range: {index} >= {}",
            self.points.len()
        );
        self.points[index]
    }

    fn set_point_at(&mut self, point: Point, index: usize) {
        assert!(
            index < self.points.len(),
            "polygon index out of range: {index} >= {}",
            self.points.len()
        );
        assert_finite_point("point", point);
        self.points[index] = point;
    }
}
