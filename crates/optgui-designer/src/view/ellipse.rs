use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};

use super::frame::{circle_path, Stroke, StrokedPath, Tone};
use super::{KindPaint, PaintContext};
use crate::bounds::Bounds;
use crate::model::{ConstraintModel, EllipseModel, Point};

/// Radius of the region an ellipse view may paint into.
///
/// `radius + clearance * grid_size`, plus the exterior border (a screen-space
/// size) when the direction is flipped.
pub fn bounding_radius(model: &EllipseModel, ctx: &PaintContext) -> f64 {
    let mut rad = model.radius() + ctx.scene.clearance_offset(model.clearance());
    if model.direction() {
        rad += ctx.scene.ellipse_border / ctx.scaling;
    }
    rad
}

pub(super) fn local_bounds(model: &EllipseModel, ctx: &PaintContext) -> Bounds {
    Bounds::around(Point::default(), bounding_radius(model, ctx))
}

pub(super) fn paint(model: &EllipseModel, ctx: &PaintContext) -> KindPaint {
    let outline = if model.width() > 0.0 && model.height() > 0.0 {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(0.0, 0.0),
            vector((model.width() / 2.0) as f32, (model.height() / 2.0) as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    } else {
        Path::new()
    };

    let clearance = (model.clearance() > 0.0).then(|| StrokedPath {
        path: circle_path(
            Point::default(),
            model.radius() + ctx.scene.clearance_offset(model.clearance()),
        ),
        stroke: Stroke::dashed(ctx.render.clearance_pen_width / ctx.scaling),
    });

    let border = model.direction().then(|| StrokedPath {
        path: circle_path(Point::default(), bounding_radius(model, ctx)),
        stroke: Stroke::solid(ctx.render.pen_width / ctx.scaling),
    });

    KindPaint {
        outline,
        clearance,
        border,
        markers: Vec::new(),
        tone: Tone::Obstacle,
    }
}
