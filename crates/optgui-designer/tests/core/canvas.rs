use lyon::algorithms::aabb::fast_bounding_box;
use optgui_core::{Error, GeometryError};
use optgui_designer::canvas::Canvas;
use optgui_designer::model::{ConstraintModel, ModelKind, Point, VertexModel};
use optgui_designer::{snapshot, Bounds};
use optgui_designer::{PointerButton, ToolMode};

fn press(canvas: &mut Canvas, x: f64, y: f64) -> Option<u64> {
    canvas
        .pointer_press(PointerButton::Primary, Point::new(x, y), false)
        .unwrap()
}

fn triangle() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(90.0, 0.0),
        Point::new(0.0, 90.0),
    ]
}

#[test]
fn test_ellipse_mode_places_default_radius() {
    let mut canvas = Canvas::default();
    assert_eq!(canvas.set_mode(ToolMode::Ellipse), ToolMode::Ellipse);
    let id = press(&mut canvas, 50.0, 60.0).unwrap();

    let ellipse = canvas.model(id).unwrap().as_ellipse().unwrap();
    assert_eq!(ellipse.position(), Point::new(50.0, 60.0));
    assert_eq!(ellipse.radius(), canvas.scene_params().default_radius);

    // choosing the active mode again goes back to idle
    assert_eq!(canvas.set_mode(ToolMode::Ellipse), ToolMode::Idle);
}

#[test]
fn test_plane_mode_takes_two_presses() {
    let mut canvas = Canvas::default();
    canvas.set_mode(ToolMode::Plane);
    assert_eq!(press(&mut canvas, 0.0, 0.0), None);
    let id = press(&mut canvas, 100.0, 0.0).unwrap();

    let model = canvas.model(id).unwrap();
    assert_eq!(model.kind(), ModelKind::Plane);
    assert_eq!(model.position(), Point::new(50.0, 0.0));
    assert_eq!(canvas.view(id).unwrap().handles().len(), 2);
}

#[test]
fn test_polygon_closed_early_is_discarded() {
    let mut canvas = Canvas::default();
    canvas.set_mode(ToolMode::Polygon);
    press(&mut canvas, 0.0, 0.0);
    press(&mut canvas, 100.0, 0.0);
    assert_eq!(press(&mut canvas, 1.0, 1.0), None);
    assert!(canvas.is_empty());
    assert!(canvas.tool().markers().is_empty());
}

#[test]
fn test_add_polygon_rejects_degenerate() {
    let mut canvas = Canvas::default();
    let err = canvas
        .add_polygon(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Geometry(GeometryError::DegeneratePolygon { count: 2 })
    ));
}

#[test]
fn test_waypoints_form_one_chain() {
    let mut canvas = Canvas::default();
    canvas.set_mode(ToolMode::Waypoint);
    let first = press(&mut canvas, 0.0, 0.0).unwrap();
    let second = press(&mut canvas, 50.0, 0.0).unwrap();
    let third = press(&mut canvas, 50.0, 50.0).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(canvas.waypoints_id(), Some(first));
    assert_eq!(canvas.len(), 1);
    assert_eq!(canvas.model(first).unwrap().point_count(), 3);
    assert_eq!(canvas.view(first).unwrap().handles().len(), 3);

    canvas.remove_item(first).unwrap();
    assert_eq!(canvas.waypoints_id(), None);
    let fresh = press(&mut canvas, 10.0, 10.0).unwrap();
    assert_ne!(fresh, first);
}

#[test]
fn test_eraser_removes_topmost_item() {
    let mut canvas = Canvas::default();
    let bottom = canvas.add_ellipse(Point::new(0.0, 0.0), 40.0);
    let top = canvas.add_ellipse(Point::new(10.0, 0.0), 40.0);
    canvas.set_mode(ToolMode::Eraser);

    assert_eq!(press(&mut canvas, 5.0, 0.0), Some(top));
    assert!(canvas.model(top).is_none());
    assert!(canvas.view(top).is_none());
    assert!(canvas.model(bottom).is_some());

    assert_eq!(press(&mut canvas, 500.0, 500.0), None);
    assert_eq!(canvas.len(), 1);
}

#[test]
fn test_flip_mode_toggles_ellipse_only() {
    let mut canvas = Canvas::default();
    let ellipse = canvas.add_ellipse(Point::new(0.0, 0.0), 30.0);
    let polygon = canvas
        .add_polygon(
            triangle()
                .into_iter()
                .map(|p| p.offset(200.0, 0.0))
                .collect(),
        )
        .unwrap();
    canvas.set_mode(ToolMode::Flip);

    assert_eq!(press(&mut canvas, 0.0, 0.0), Some(ellipse));
    assert!(canvas.model(ellipse).unwrap().as_ellipse().unwrap().direction());
    assert_eq!(press(&mut canvas, 0.0, 0.0), Some(ellipse));
    assert!(!canvas.model(ellipse).unwrap().as_ellipse().unwrap().direction());

    assert_eq!(canvas.flip_direction(polygon).unwrap(), None);
    assert_eq!(press(&mut canvas, 220.0, 20.0), None);
}

#[test]
fn test_vertex_drag_keeps_anchor() {
    let mut canvas = Canvas::default();
    let id = canvas.add_polygon(triangle()).unwrap();
    let anchor = canvas.model(id).unwrap().position();

    assert_eq!(press(&mut canvas, 20.0, 20.0), Some(id));
    assert_eq!(press(&mut canvas, 90.0, 0.0), Some(id));
    assert!(canvas.pointer_move(Point::new(120.0, -10.0)).unwrap());
    canvas.pointer_release(PointerButton::Primary);

    let model = canvas.model(id).unwrap();
    assert_eq!(model.position(), anchor);
    let vertices = model.as_vertex_model().unwrap();
    assert_eq!(vertices.point_at(1), Point::new(120.0, -10.0));

    let handle = &canvas.view(id).unwrap().handles()[1];
    assert_eq!(
        handle.position(),
        Point::new(120.0 - anchor.x, -10.0 - anchor.y)
    );
}

#[test]
fn test_focus_loss_cancels_drag_and_keeps_changes() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    canvas.select(id, false).unwrap();
    press(&mut canvas, -20.0, 0.0);
    assert!(canvas.pointer_move(Point::new(-60.0, 0.0)).unwrap());

    canvas.focus_lost();
    assert!(!canvas.view(id).unwrap().is_dragging());
    assert!(!canvas.pointer_move(Point::new(-90.0, 0.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().as_ellipse().unwrap().width(), 60.0);
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    assert_eq!(
        canvas
            .pointer_press(PointerButton::Secondary, Point::new(0.0, 0.0), false)
            .unwrap(),
        None
    );
    assert!(!canvas.view(id).unwrap().is_selected());
}

#[test]
fn test_duplicate_offsets_and_clears_port() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    canvas.bind_port(id, 7).unwrap();
    canvas.select(id, false).unwrap();

    let copies = canvas.duplicate_selected();
    assert_eq!(copies.len(), 1);
    let copy = canvas.model(copies[0]).unwrap();
    let offset = canvas.scene_params().duplicate_offset;
    assert_eq!(copy.position(), Point::new(offset, offset));
    assert_eq!(copy.port(), 0);
    assert_eq!(canvas.selected_ids(), copies);
    assert!(!canvas.view(id).unwrap().is_selected());
}

#[test]
fn test_duplicate_skips_waypoint_chain() {
    let mut canvas = Canvas::default();
    let chain = canvas.add_waypoint(Point::new(0.0, 0.0));
    canvas.add_waypoint(Point::new(40.0, 0.0));
    canvas.select(chain, false).unwrap();
    assert!(canvas.duplicate_selected().is_empty());
    assert_eq!(canvas.len(), 1);
}

#[test]
fn test_bind_port_rules() {
    let mut canvas = Canvas::default();
    let a = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    let b = canvas.add_plane(Point::new(100.0, 0.0), Point::new(200.0, 0.0));

    assert!(matches!(
        canvas.bind_port(a, 0),
        Err(Error::Geometry(GeometryError::ReservedPort))
    ));
    canvas.bind_port(a, 3).unwrap();
    canvas.bind_port(a, 3).unwrap();
    assert!(matches!(
        canvas.bind_port(b, 3),
        Err(Error::Geometry(GeometryError::PortInUse { port: 3, owner })) if owner == a
    ));
    assert!(canvas.bind_port(999, 4).unwrap_err().is_unknown_item());

    assert_eq!(canvas.unbind_port(a).unwrap(), 3);
    canvas.bind_port(b, 3).unwrap();
    assert_eq!(canvas.model(b).unwrap().port(), 3);
}

#[test]
fn test_port_label_follows_zoom() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    assert!(canvas.repaint_item(id).unwrap().label.is_none());

    canvas.bind_port(id, 12).unwrap();
    assert_eq!(canvas.take_repaint_requests(), vec![id]);
    let label = canvas.repaint_item(id).unwrap().label.unwrap();
    assert_eq!(label.text, "12");
    assert_eq!(label.font_size, 12.0);
    assert_eq!(label.half_box, 50.0);
    assert!(canvas.take_repaint_requests().is_empty());
}

#[test]
fn test_solver_snapshot_lists_bound_items() {
    let mut canvas = Canvas::default();
    let ellipse = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    canvas.add_ellipse(Point::new(300.0, 0.0), 20.0);
    let polygon = canvas.add_polygon(triangle()).unwrap();
    canvas.bind_port(polygon, 2).unwrap();
    canvas.bind_port(ellipse, 1).unwrap();

    let records = canvas.solver_snapshot();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, ModelKind::Ellipse);
    assert_eq!(records[0].radius, Some(20.0));
    assert_eq!(records[1].port, 2);
    assert_eq!(records[1].points, triangle());

    let json = snapshot::to_json(&records).unwrap();
    assert_eq!(snapshot::from_json(&json).unwrap(), records);
}

#[test]
fn test_scene_grows_to_cover_new_items() {
    let mut canvas = Canvas::default();
    let before = canvas.scene_rect();
    canvas.add_ellipse(Point::new(2000.0, -1500.0), 100.0);
    let after = canvas.scene_rect();
    assert!(after.contains(&before));
    assert!(after.max_x >= 2100.0);
    assert!(after.min_y <= -1600.0);

    canvas.remove_item(canvas.item_at(Point::new(2000.0, -1500.0)).unwrap()).unwrap();
    assert_eq!(canvas.scene_rect(), after);
}

#[test]
fn test_clear_resets_canvas() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    canvas.add_waypoint(Point::new(5.0, 5.0));
    canvas.select(id, false).unwrap();
    canvas.clear();

    assert!(canvas.is_empty());
    assert!(canvas.selected_ids().is_empty());
    assert_eq!(canvas.waypoints_id(), None);
    assert!(canvas.select(id, false).unwrap_err().is_unknown_item());
    assert!(canvas.repaint().is_empty());
}

#[test]
fn test_body_drag_follows_pointer_past_scene_edge() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    let before = canvas.scene_rect();

    assert_eq!(press(&mut canvas, 5.0, 5.0), Some(id));
    assert!(canvas.pointer_move(Point::new(300.0, 300.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().position(), Point::new(295.0, 295.0));
    assert!(canvas.pointer_move(Point::new(1000.0, 1000.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().position(), Point::new(995.0, 995.0));

    let after = canvas.scene_rect();
    assert!(after.contains(&before));
    assert!(after.max_x >= 1015.0);
    assert!(after.max_y >= 1015.0);

    assert!(canvas.pointer_release(PointerButton::Primary));
    assert!(!canvas.pointer_move(Point::new(0.0, 0.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().position(), Point::new(995.0, 995.0));
}

#[test]
fn test_body_drag_ends_on_focus_loss() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    press(&mut canvas, 0.0, 0.0);
    assert!(canvas.pointer_move(Point::new(40.0, 0.0)).unwrap());

    canvas.focus_lost();
    assert!(!canvas.pointer_move(Point::new(80.0, 0.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().position(), Point::new(40.0, 0.0));
}

#[test]
fn test_press_on_empty_space_grabs_nothing() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    assert_eq!(press(&mut canvas, 500.0, 500.0), None);
    assert!(!canvas.pointer_move(Point::new(600.0, 600.0)).unwrap());
    assert_eq!(canvas.model(id).unwrap().position(), Point::new(0.0, 0.0));
}

#[test]
fn test_raising_clearance_grows_scene() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(550.0, 0.0), 20.0);
    assert!(canvas.scene_rect().max_x < 670.0);

    canvas.set_clearance(id, 1.0).unwrap();
    assert_eq!(canvas.model(id).unwrap().clearance(), 1.0);
    assert!(canvas.scene_rect().max_x >= 670.0);

    let frame = canvas.repaint_item(id).unwrap();
    assert!(frame.clearance.is_some());
    assert!(canvas.scene_rect().contains(&frame.bounds));

    assert!(canvas.set_clearance(999, 1.0).unwrap_err().is_unknown_item());
}

#[test]
fn test_spiked_polygon_ring_stays_inside_bounds() {
    let mut canvas = Canvas::default();
    let id = canvas
        .add_polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(400.0, 10.0),
            Point::new(0.0, 20.0),
        ])
        .unwrap();
    canvas.set_clearance(id, 1.0).unwrap();

    let frame = canvas.repaint_item(id).unwrap();
    let ring = frame.clearance.expect("clearance ring");
    let b = fast_bounding_box(ring.path.iter());
    let ring_bounds = Bounds::new(
        frame.position.x + b.min.x as f64,
        frame.position.y + b.min.y as f64,
        frame.position.x + b.max.x as f64,
        frame.position.y + b.max.y as f64,
    );

    // The far tip sits about one clearance offset past the apex.
    assert!(ring_bounds.max_x >= 495.0);
    let slack = ring_bounds.inflate(-0.01);
    assert!(frame.bounds.contains(&slack));
    assert!(canvas.scene_rect().contains(&slack));
}
