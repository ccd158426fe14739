use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use lyon::geom::ArcFlags;
use lyon::math::{point, vector, Angle};
use lyon::path::builder::SvgPathBuilder;
use lyon::path::Path;

use super::frame::{path_bounds, polyline_path, Stroke, StrokedPath, Tone};
use super::{to_local, KindPaint, PaintContext};
use crate::bounds::Bounds;
use crate::model::{ConstraintModel, Point, PolygonModel};

/// Bulges below this are drawn as straight segments.
const BULGE_EPSILON: f64 = 1e-9;

pub(super) fn local_bounds(model: &PolygonModel, origin: Point, ctx: &PaintContext) -> Bounds {
    let local = to_local(model.points(), origin);
    let outline =
        Bounds::from_points(&local).unwrap_or_else(|| Bounds::around(Point::default(), 0.0));
    if !model.is_closed() {
        return outline;
    }
    let ring = clearance_ring(&local, ctx.scene.clearance_offset(model.clearance()));
    path_bounds(&ring).map_or(outline, |r| outline.union(&r))
}

pub(super) fn paint(model: &PolygonModel, origin: Point, ctx: &PaintContext) -> KindPaint {
    let local = to_local(model.points(), origin);
    let outline = polyline_path(&local, model.is_closed());

    let offset = ctx.scene.clearance_offset(model.clearance());
    let clearance = (model.is_closed() && offset > 0.0).then(|| StrokedPath {
        path: clearance_ring(&local, offset),
        stroke: Stroke::dashed(ctx.render.clearance_pen_width / ctx.scaling),
    });

    KindPaint {
        outline,
        clearance,
        border: None,
        markers: Vec::new(),
        tone: Tone::Region,
    }
}

/// Closed polyline through `points` with a non-positive signed area, the
/// orientation in which a positive parallel offset grows the loop.
fn clockwise_polyline(points: &[Point]) -> Polyline {
    let signed_area: f64 = (0..points.len())
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            a.x * b.y - b.x * a.y
        })
        .sum();

    let mut ordered = points.to_vec();
    if signed_area > 0.0 {
        ordered.reverse();
    }

    let mut polyline = Polyline::new();
    for p in &ordered {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);
    polyline
}

/// Outward parallel offset of a closed polygon by `distance`, with round
/// joins at convex corners. Empty for fewer than three points or a
/// non-positive distance.
pub fn clearance_ring(points: &[Point], distance: f64) -> Path {
    if points.len() < 3 || distance <= 0.0 {
        return Path::new();
    }
    let offsets = clockwise_polyline(points).parallel_offset(distance);

    let mut builder = Path::builder().with_svg();
    for ring in offsets.iter().filter(|r| r.vertex_data.len() >= 2) {
        let vertices = &ring.vertex_data;
        builder.move_to(point(vertices[0].x as f32, vertices[0].y as f32));
        for (i, v) in vertices.iter().enumerate() {
            let next = &vertices[(i + 1) % vertices.len()];
            let to = point(next.x as f32, next.y as f32);
            if v.bulge.abs() < BULGE_EPSILON {
                builder.line_to(to);
                continue;
            }
            // bulge = tan(sweep / 4)
            let chord = ((next.x - v.x).powi(2) + (next.y - v.y).powi(2)).sqrt();
            let radius = chord * (1.0 + v.bulge * v.bulge) / (4.0 * v.bulge.abs());
            builder.arc_to(
                vector(radius as f32, radius as f32),
                Angle::radians(0.0),
                ArcFlags {
                    large_arc: v.bulge.abs() > 1.0,
                    sweep: v.bulge > 0.0,
                },
                to,
            );
        }
        builder.close();
    }
    builder.build()
}
