use optgui_designer::handle::ellipse_drag;
use optgui_designer::model::{EllipseModel, GeometryModel, Point};
use optgui_designer::scene::{expand_scene, Scene, SceneHost};
use optgui_designer::{Bounds, HandleKind, HandleTarget, ModelStore, PointerButton, ResizeHandle};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = HandleKind> {
    prop_oneof![
        Just(HandleKind::Width),
        Just(HandleKind::Height),
        Just(HandleKind::Both),
    ]
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-1.0e4..1.0e4f64, -1.0e4..1.0e4f64).prop_map(|(x, y)| Point::new(x, y))
}

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (point_strategy(), point_strategy()).prop_map(|(a, b)| Bounds::new(a.x, a.y, b.x, b.y))
}

proptest! {
    #[test]
    fn prop_drag_rotation_in_range(
        pointer in point_strategy(),
        anchor in point_strategy(),
        kind in kind_strategy(),
    ) {
        let drag = ellipse_drag(pointer, anchor, kind);
        prop_assert!(drag.rotation >= 0.0 && drag.rotation < 360.0);
        prop_assert!(drag.length >= 0.0);
    }

    #[test]
    fn prop_set_rotation_normalizes(angle in -1.0e6..1.0e6f64) {
        let mut ellipse = EllipseModel::new(Point::default(), 10.0);
        ellipse.set_rotation(angle);
        prop_assert!(ellipse.rotation() >= 0.0 && ellipse.rotation() < 360.0);
    }

    #[test]
    fn prop_handle_drag_writes_length(
        pointer in point_strategy(),
        kind in kind_strategy(),
    ) {
        let mut store = ModelStore::new();
        let id = store.insert(GeometryModel::Ellipse(EllipseModel::new(Point::default(), 20.0)));
        let mut handle = ResizeHandle::new(id, HandleTarget::Ellipse(kind));
        handle.set_visible(true);
        prop_assert!(handle.press(PointerButton::Primary, true));
        prop_assert!(handle.drag_to(&mut store, pointer, Point::default()).unwrap());

        let ellipse = store.get(id).and_then(GeometryModel::as_ellipse).unwrap();
        let length = pointer.distance_to(&Point::default());
        prop_assert!(ellipse.radius() >= 0.0);
        match kind {
            HandleKind::Width => {
                prop_assert_eq!(ellipse.width(), length);
                prop_assert_eq!(ellipse.height(), 40.0);
            }
            HandleKind::Height => {
                prop_assert_eq!(ellipse.height(), length);
                prop_assert_eq!(ellipse.width(), 40.0);
            }
            HandleKind::Both => {
                prop_assert_eq!(ellipse.width(), length);
                prop_assert_eq!(ellipse.height(), length);
            }
        }
    }

    #[test]
    fn prop_expand_scene_monotonic_and_idempotent(
        start in bounds_strategy(),
        items in prop::collection::vec(bounds_strategy(), 1..8),
    ) {
        let mut scene = Scene::new(start);
        for item in &items {
            let before = scene.scene_rect();
            expand_scene(&mut scene, item);
            let after = scene.scene_rect();
            prop_assert!(after.contains(item));
            prop_assert!(after.contains(&before));
            prop_assert!(after.area() >= before.area());

            prop_assert!(!expand_scene(&mut scene, item));
            prop_assert_eq!(scene.scene_rect(), after);
        }
    }
}
