use super::frame::{circle_path, polyline_path, Tone};
use super::{to_local, KindPaint, PaintContext};
use crate::bounds::Bounds;
use crate::model::{Point, WaypointsModel};

fn marker_radius(ctx: &PaintContext) -> f64 {
    ctx.scene.marker_size / ctx.scaling
}

pub(super) fn local_bounds(model: &WaypointsModel, origin: Point, ctx: &PaintContext) -> Bounds {
    let local = to_local(model.points(), origin);
    Bounds::from_points(&local)
        .unwrap_or_else(|| Bounds::around(Point::default(), 0.0))
        .inflate(marker_radius(ctx))
}

pub(super) fn paint(model: &WaypointsModel, origin: Point, ctx: &PaintContext) -> KindPaint {
    let local = to_local(model.points(), origin);
    let markers = local
        .iter()
        .map(|p| circle_path(*p, marker_radius(ctx)))
        .collect();
    KindPaint {
        outline: polyline_path(&local, false),
        clearance: None,
        border: None,
        markers,
        tone: Tone::Waypoint,
    }
}
