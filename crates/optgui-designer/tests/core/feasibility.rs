use std::thread;

use optgui_designer::canvas::Canvas;
use optgui_designer::model::Point;
use optgui_designer::FeasibilityChannel;

#[test]
fn test_concurrent_writers_and_readers() {
    let channel = FeasibilityChannel::new();
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let channel = channel.clone();
            thread::spawn(move || {
                for n in 0..500 {
                    channel.set_feasible((n + i) % 2 == 0);
                }
                channel.set_feasible(false);
            })
        })
        .collect();
    let readers: Vec<_> = (0..3)
        .map(|_| {
            let channel = channel.clone();
            thread::spawn(move || (0..500).filter(|_| channel.is_feasible()).count())
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    for reader in readers {
        assert!(reader.join().unwrap() <= 500);
    }
    assert!(!channel.is_feasible());
}

#[test]
fn test_drone_channel_is_shared_with_model() {
    let mut canvas = Canvas::default();
    let id = canvas.add_drone(Point::new(0.0, 0.0));
    let channel = canvas.feasibility_channel(id).unwrap();

    let handle = thread::spawn(move || channel.set_feasible(false));
    handle.join().unwrap();

    let drone = canvas.model(id).unwrap().as_drone().unwrap();
    assert!(!drone.is_feasible());
}

#[test]
fn test_duplicated_drone_gets_its_own_flag() {
    let mut canvas = Canvas::default();
    let id = canvas.add_drone(Point::new(0.0, 0.0));
    canvas.select(id, false).unwrap();
    let copy = canvas.duplicate_selected()[0];

    let original = canvas.feasibility_channel(id).unwrap();
    let copied = canvas.feasibility_channel(copy).unwrap();
    assert!(!original.shares_cell_with(&copied));

    original.set_feasible(false);
    assert!(copied.is_feasible());
}

#[test]
fn test_feasibility_channel_rejects_other_kinds() {
    let mut canvas = Canvas::default();
    let id = canvas.add_ellipse(Point::new(0.0, 0.0), 10.0);
    let err = canvas.feasibility_channel(id).unwrap_err();
    assert_eq!(err.to_string(), "Operation 'feasibility' not supported for ellipse");
}
