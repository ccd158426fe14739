//! Solver-facing view of the bound items.
//!
//! Each item with a non-zero port becomes one [`ConstraintRecord`], read at
//! serialisation time straight from the model.

use optgui_core::Result;
use serde::{Deserialize, Serialize};

use crate::model::{ConstraintModel, GeometryModel, ModelKind, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    pub port: u32,
    pub kind: ModelKind,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<bool>,
    pub clearance: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
}

impl ConstraintRecord {
    pub fn from_model(model: &GeometryModel) -> Self {
        let mut record = Self {
            port: model.port(),
            kind: model.kind(),
            position: model.position(),
            radius: None,
            width: None,
            height: None,
            rotation: None,
            direction: None,
            clearance: model.clearance(),
            points: Vec::new(),
        };
        match model {
            GeometryModel::Ellipse(e) => {
                record.radius = Some(e.radius());
                record.width = Some(e.width());
                record.height = Some(e.height());
                record.rotation = Some(e.rotation());
                record.direction = Some(e.direction());
            }
            GeometryModel::Polygon(p) => record.points = p.points().to_vec(),
            GeometryModel::Plane(p) => record.points = vec![p.p1(), p.p2()],
            GeometryModel::Waypoints(w) => record.points = w.points().to_vec(),
            GeometryModel::Drone(_) => {}
        }
        record
    }
}

/// Serialises a snapshot as a JSON array.
pub fn to_json(records: &[ConstraintRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn from_json(json: &str) -> Result<Vec<ConstraintRecord>> {
    Ok(serde_json::from_str(json)?)
}
