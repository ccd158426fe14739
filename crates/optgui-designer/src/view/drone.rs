use super::frame::{polyline_path, Stroke, StrokedPath, Tone};
use super::{KindPaint, PaintContext};
use crate::bounds::Bounds;
use crate::model::{ConstraintModel, DroneModel, Point};

fn square(half: f64) -> [Point; 4] {
    [
        Point::new(-half, -half),
        Point::new(half, -half),
        Point::new(half, half),
        Point::new(-half, half),
    ]
}

pub(super) fn local_bounds(model: &DroneModel, ctx: &PaintContext) -> Bounds {
    let reach = model.half_size() + ctx.scene.clearance_offset(model.clearance());
    Bounds::around(Point::default(), reach)
}

/// Reads the feasibility flag once; a concurrent solver write lands on the
/// next repaint.
pub(super) fn paint(model: &DroneModel, ctx: &PaintContext) -> KindPaint {
    let h = model.half_size();
    let tone = if model.is_feasible() {
        Tone::Feasible
    } else {
        Tone::Infeasible
    };

    let offset = ctx.scene.clearance_offset(model.clearance());
    let clearance = (offset > 0.0).then(|| StrokedPath {
        path: polyline_path(&square(h + offset), true),
        stroke: Stroke::dashed(ctx.render.clearance_pen_width / ctx.scaling),
    });

    KindPaint {
        outline: polyline_path(&square(h), true),
        clearance,
        border: None,
        markers: Vec::new(),
        tone,
    }
}
