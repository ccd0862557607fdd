use cryoviz_core::geom::point;
use cryoviz_render::tilt::{MAX_ROTATION, Rotation};
use cryoviz_render::{PointerRelease, TiltController};

#[test]
fn small_moves_stay_a_click() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(100.0, 100.0));
    assert!(!tilt.pointer_move(point(102.0, 101.0)));
    assert_eq!(tilt.rotation(), Rotation::default());
    assert!(tilt.click_allowed());
    assert_eq!(tilt.pointer_up(), PointerRelease::Click);
}

#[test]
fn moves_without_pointer_down_are_ignored() {
    let mut tilt = TiltController::new();
    assert!(!tilt.pointer_move(point(500.0, 500.0)));
    assert_eq!(tilt.rotation(), Rotation::default());
}

#[test]
fn drag_rotates_and_suppresses_the_click() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(0.0, 0.0));
    assert!(tilt.pointer_move(point(20.0, -40.0)));
    let r = tilt.rotation();
    assert!((r.y - 6.0).abs() < 1e-9);
    assert!((r.x - 12.0).abs() < 1e-9);
    assert!(tilt.is_dragging());
    assert_eq!(tilt.css_transition(), "none");

    assert_eq!(tilt.pointer_up(), PointerRelease::DragEnd);
    assert!(!tilt.click_allowed());
    assert!(!tilt.is_dragging());
    assert_eq!(tilt.css_transition(), "transform 0.3s ease-out");

    // The next press starts fresh.
    tilt.pointer_down(point(0.0, 0.0));
    assert!(tilt.click_allowed());
}

#[test]
fn once_dragging_small_moves_count() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(0.0, 0.0));
    assert!(tilt.pointer_move(point(10.0, 0.0)));
    // Back under the threshold relative to the start, still part of the drag.
    assert!(tilt.pointer_move(point(1.0, 0.0)));
    assert!((tilt.rotation().y - 0.3).abs() < 1e-9);
}

#[test]
fn each_axis_clamps_independently() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(0.0, 0.0));
    tilt.pointer_move(point(1000.0, 10.0));
    let r = tilt.rotation();
    assert_eq!(r.y, MAX_ROTATION);
    assert!((r.x + 3.0).abs() < 1e-9);

    tilt.pointer_move(point(-1000.0, -1000.0));
    let r = tilt.rotation();
    assert_eq!(r.y, -MAX_ROTATION);
    assert_eq!(r.x, MAX_ROTATION);
}

#[test]
fn drags_continue_from_the_current_rotation() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(0.0, 0.0));
    tilt.pointer_move(point(100.0, 0.0));
    tilt.pointer_up();
    assert_eq!(tilt.rotation().y, MAX_ROTATION);

    tilt.pointer_down(point(0.0, 0.0));
    tilt.pointer_move(point(-50.0, 0.0));
    assert!((tilt.rotation().y - 10.0).abs() < 1e-9);
}

#[test]
fn css_strings() {
    let mut tilt = TiltController::new();
    assert_eq!(
        tilt.css_transform(),
        "perspective(800px) rotateX(0deg) rotateY(0deg)"
    );
    assert_eq!(
        tilt.css_drop_shadow(),
        "drop-shadow(0px 4px 8px rgba(0,0,0,0.5))"
    );

    tilt.pointer_down(point(0.0, 0.0));
    tilt.pointer_move(point(100.0, -100.0));
    assert_eq!(
        tilt.css_transform(),
        "perspective(800px) rotateX(25deg) rotateY(25deg)"
    );
    assert_eq!(
        tilt.css_drop_shadow(),
        "drop-shadow(7.5px -3.5px 8px rgba(0,0,0,0.5))"
    );
    assert!(tilt.css_style().starts_with("transform: perspective(800px)"));

    tilt.reset();
    assert_eq!(tilt.rotation(), Rotation::default());
}
