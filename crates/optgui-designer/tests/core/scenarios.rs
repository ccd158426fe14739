use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use optgui_designer::canvas::Canvas;
use optgui_designer::model::{ConstraintModel, Point};
use optgui_designer::view::Tone;
use optgui_designer::{Bounds, HandleTarget, PointerButton, ToolMode, Viewport};
use optgui_core::{RenderParams, SceneParams};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_new_ellipse_bounds_and_single_handle() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);

    let model = canvas.model(id).unwrap();
    let ellipse = model.as_ellipse().unwrap();
    assert_eq!(ellipse.width(), 40.0);
    assert_eq!(ellipse.height(), 40.0);
    assert_eq!(ellipse.clearance(), 0.0);

    let view = canvas.view(id).unwrap();
    assert_eq!(
        view.bounding_rect(model, 1.0),
        Bounds::new(-20.0, -20.0, 20.0, 20.0)
    );

    canvas.select(id, false).unwrap();
    let view = canvas.view(id).unwrap();
    let handles: Vec<_> = view.visible_handles().collect();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].position(), Point::new(-20.0, 0.0));
}

#[test]
fn test_both_handle_drag_sets_size_and_rotation() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);

    // select, then grab the handle
    assert_eq!(
        canvas
            .pointer_press(PointerButton::Primary, Point::new(0.0, 0.0), false)
            .unwrap(),
        Some(id)
    );
    assert_eq!(
        canvas
            .pointer_press(PointerButton::Primary, Point::new(-20.0, 0.0), false)
            .unwrap(),
        Some(id)
    );
    assert!(canvas.view(id).unwrap().is_dragging());

    // 50 units from the anchor, line towards the anchor at 30 degrees
    let angle = 30f64.to_radians();
    let pointer = Point::new(-50.0 * angle.cos(), 50.0 * angle.sin());
    assert!(canvas.pointer_move(pointer).unwrap());

    let ellipse = canvas.model(id).unwrap().as_ellipse().unwrap();
    assert!(approx(ellipse.width(), 50.0));
    assert!(approx(ellipse.height(), 50.0));
    assert!(approx(ellipse.rotation(), 285.0));

    assert!(canvas.pointer_release(PointerButton::Primary));
    assert!(!canvas.view(id).unwrap().is_dragging());
    assert!(approx(canvas.view(id).unwrap().rotation(), 285.0));
}

#[test]
fn test_polygon_closing_click_yields_three_handles() {
    let mut canvas = Canvas::default();
    canvas.set_mode(ToolMode::Polygon);

    for p in [Point::new(0.0, 0.0), Point::new(100.0, 0.0)] {
        assert_eq!(
            canvas.pointer_press(PointerButton::Primary, p, false).unwrap(),
            None
        );
    }
    assert_eq!(canvas.tool().markers().len(), 2);
    assert!(canvas.is_empty());

    canvas
        .pointer_press(PointerButton::Primary, Point::new(100.0, 100.0), false)
        .unwrap();
    let id = canvas
        .pointer_press(PointerButton::Primary, Point::new(3.0, 2.0), false)
        .unwrap()
        .expect("closing click creates the polygon");

    let polygon = canvas.model(id).unwrap().as_polygon().unwrap();
    assert_eq!(polygon.points().len(), 3);
    assert!(polygon.is_closed());
    assert!(canvas.tool().markers().is_empty());

    let indices: Vec<_> = canvas
        .view(id)
        .unwrap()
        .handles()
        .iter()
        .map(|h| h.target())
        .collect();
    assert_eq!(
        indices,
        vec![
            HandleTarget::Vertex { index: 0 },
            HandleTarget::Vertex { index: 1 },
            HandleTarget::Vertex { index: 2 },
        ]
    );
}

#[test]
fn test_flip_adds_border_only() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut canvas =
        Canvas::with_viewport(SceneParams::default(), RenderParams::default(), viewport);
    assert!(canvas.set_zoom(2.0));

    let id = canvas.add_ellipse(Point::new(10.0, 10.0), 20.0);
    canvas.set_clearance(id, 0.5).unwrap();

    let before = canvas.model(id).unwrap().as_ellipse().unwrap().clone();
    let radius = |canvas: &Canvas| {
        let model = canvas.model(id).unwrap();
        canvas.view(id).unwrap().bounding_rect(model, canvas.zoom()).width() / 2.0
    };
    assert!(approx(radius(&canvas), 20.0 + 0.5 * 100.0));

    assert_eq!(canvas.flip_direction(id).unwrap(), Some(true));
    assert!(approx(radius(&canvas), 70.0 + 10.0 / 2.0));

    let after = canvas.model(id).unwrap().as_ellipse().unwrap();
    assert!(after.direction());
    assert_eq!(after.width(), before.width());
    assert_eq!(after.height(), before.height());
    assert_eq!(after.rotation(), before.rotation());
    assert_eq!(after.clearance(), before.clearance());
    assert_eq!(after.position(), before.position());
    assert_eq!(after.port(), before.port());
}

#[test]
fn test_feasibility_write_does_not_block_unrelated_repaint() {
    let mut canvas = Canvas::default();
    let drone = canvas.add_drone(Point::new(200.0, 0.0));
    let ellipse = canvas.add_ellipse(Point::new(-200.0, 0.0), 30.0);
    let channel = canvas.feasibility_channel(drone).unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let writer = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            loop {
                channel.set_feasible(false);
                if stop.load(Ordering::Relaxed) {
                    break;
                }
            }
        })
    };

    for _ in 0..200 {
        let frame = canvas.repaint_item(ellipse).unwrap();
        assert_eq!(frame.tone, Tone::Obstacle);
    }
    stop.store(true, Ordering::Relaxed);
    writer.join().unwrap();

    let frame = canvas.repaint_item(drone).unwrap();
    assert_eq!(frame.tone, Tone::Infeasible);
}
