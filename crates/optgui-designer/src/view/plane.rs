use super::frame::{polyline_path, Tone};
use super::{to_local, KindPaint, PaintContext};
use crate::bounds::Bounds;
use crate::model::{PlaneModel, Point};

pub(super) fn local_bounds(model: &PlaneModel, origin: Point, ctx: &PaintContext) -> Bounds {
    let local = to_local(&[model.p1(), model.p2()], origin);
    Bounds::from_points(&local)
        .unwrap_or_else(|| Bounds::around(Point::default(), 0.0))
        .inflate(ctx.render.selected_pen_width / ctx.scaling)
}

pub(super) fn paint(model: &PlaneModel, origin: Point, _ctx: &PaintContext) -> KindPaint {
    let local = to_local(&[model.p1(), model.p2()], origin);
    KindPaint {
        outline: polyline_path(&local, false),
        clearance: None,
        border: None,
        markers: Vec::new(),
        tone: Tone::Constraint,
    }
}
