use super::{assert_finite_point, assert_non_negative, ConstraintModel, ModelKind, Point};
use crate::feasibility::FeasibilityChannel;

/// Vehicle start position; carries the solver's feasibility verdict.
#[derive(Debug, Clone)]
pub struct DroneModel {
    position: Point,
    port: u32,
    half_size: f64,
    clearance: f64,
    feasibility: FeasibilityChannel,
}

impl DroneModel {
    pub fn new(position: Point, half_size: f64) -> Self {
        assert_finite_point("position", position);
        assert!(
            half_size.is_finite() && half_size > 0.0,
            "half_size must be positive and finite, got {half_size}"
        );
        Self {
            position,
            port: 0,
            half_size,
            clearance: 0.0,
            feasibility: FeasibilityChannel::new(),
        }
    }

    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Handle the solver side uses to publish results.
    pub fn feasibility(&self) -> &FeasibilityChannel {
        &self.feasibility
    }

    pub fn is_feasible(&self) -> bool {
        self.feasibility.is_feasible()
    }

    /// Copy with its own, feasible, cell.
    pub(crate) fn detached_copy(&self) -> Self {
        Self {
            feasibility: FeasibilityChannel::new(),
            ..self.clone()
        }
    }
}

impl ConstraintModel for DroneModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Drone
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
        let reach = self.half_size + tolerance;
        (p.x - self.position.x).abs() <= reach && (p.y - self.position.y).abs() <= reach
    }
}
