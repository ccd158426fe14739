use optgui_core::{RenderParams, SceneParams};
use optgui_designer::canvas::Canvas;
use optgui_designer::model::Point;
use optgui_designer::{Bounds, Viewport};

#[test]
fn test_viewport_origin_is_centered() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 600.0);
    assert_eq!(vp.pan_y(), 400.0);
    assert_eq!(vp.pixel_to_scene(600.0, 400.0), Point::new(0.0, 0.0));
}

#[test]
fn test_positive_y_goes_down() {
    let vp = Viewport::new(1200.0, 800.0);
    let (_, py0) = vp.scene_to_pixel(&Point::new(0.0, 0.0));
    let (_, py100) = vp.scene_to_pixel(&Point::new(0.0, 100.0));
    assert!(py100 > py0);
}

#[test]
fn test_zoom_limits_are_inclusive() {
    let mut vp = Viewport::new(800.0, 600.0).with_zoom_limits(0.5, 4.0);
    assert!(vp.set_zoom(4.0));
    assert!(!vp.zoom_in());
    assert_eq!(vp.zoom(), 4.0);
    assert!(vp.set_zoom(0.5));
    assert!(!vp.set_zoom(0.49));
    assert_eq!(vp.zoom(), 0.5);
}

#[test]
fn test_attached_viewport_tracks_scene_extent() {
    let viewport = Viewport::new(2000.0, 1000.0);
    let mut canvas =
        Canvas::with_viewport(SceneParams::default(), RenderParams::default(), viewport);

    // the initial extent covers the viewport's pixel area
    let rect = canvas.scene_rect();
    assert!(rect.contains(&Bounds::new(-1000.0, -500.0, 1000.0, 500.0)));
    assert_eq!(canvas.scene().viewport().unwrap().scene_rect(), rect);

    canvas.add_ellipse(Point::new(3000.0, 0.0), 50.0);
    let grown = canvas.scene_rect();
    assert!(grown.max_x >= 3050.0);
    assert_eq!(canvas.scene().viewport().unwrap().scene_rect(), grown);

    assert!(canvas.resize_viewport(8000.0, 1000.0));
    assert!(canvas.scene_rect().min_x <= -4000.0);
}

#[test]
fn test_zoom_rescales_pens_and_handles() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut canvas =
        Canvas::with_viewport(SceneParams::default(), RenderParams::default(), viewport);
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
    canvas.select(id, false).unwrap();
    assert!(canvas.set_zoom(4.0));

    let frame = canvas.repaint_item(id).unwrap();
    assert_eq!(frame.outline.stroke.width, 3.0 / 4.0);
    assert_eq!(frame.handles.len(), 1);
    assert_eq!(frame.handles[0].radius, 8.0 / 4.0);
    assert_eq!(canvas.view(id).unwrap().scaling_factor(), 4.0);

    assert!(!canvas.set_zoom(1000.0));
    assert_eq!(canvas.zoom(), 4.0);
}
