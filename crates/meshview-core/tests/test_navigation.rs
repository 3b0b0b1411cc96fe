use approx::assert_abs_diff_eq;

use meshview_core::geometry::{Point, Size};
use meshview_core::navigation::{DragState, NavigationController, NavigationOutcome, PointerButton};
use meshview_core::viewport::{ScrollAxis, ScrollState};

const PREVIEW: Size = Size::new(500.0, 300.0);

fn stage_scroll() -> ScrollState {
    ScrollState::new(ScrollAxis::new(0.0, 0.0, 1000.0), ScrollAxis::new(0.0, 0.0, 600.0))
}

#[test]
fn test_starts_idle() {
    let nav = NavigationController::new();
    assert_eq!(nav.state(), DragState::Idle);
    assert!(!nav.is_dragging());
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    let outcome = nav.moved(Point::new(100.0, 50.0), PREVIEW, &mut scroll);
    assert_eq!(outcome, NavigationOutcome::IGNORED);
    assert!(!outcome.needs_preview_repaint());
    assert_eq!(scroll, stage_scroll());
}

#[test]
fn test_primary_press_scrolls_to_point() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    let outcome = nav.press(PointerButton::Primary, Point::new(100.0, 50.0), PREVIEW, &mut scroll);

    assert!(nav.is_dragging());
    assert!(outcome.horizontal_applied && outcome.vertical_applied);
    assert!(outcome.needs_preview_repaint());
    assert_abs_diff_eq!(scroll.horizontal.value, 200.0, epsilon = 1e-4);
    assert_abs_diff_eq!(scroll.vertical.value, 100.0, epsilon = 1e-4);
}

#[test]
fn test_secondary_press_does_not_drag() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    let outcome = nav.press(PointerButton::Secondary, Point::new(100.0, 50.0), PREVIEW, &mut scroll);
    assert_eq!(outcome, NavigationOutcome::IGNORED);
    assert!(!nav.is_dragging());

    nav.moved(Point::new(250.0, 150.0), PREVIEW, &mut scroll);
    assert_eq!(scroll, stage_scroll());
}

#[test]
fn test_drag_follows_pointer() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    nav.press(PointerButton::Primary, Point::new(0.0, 0.0), PREVIEW, &mut scroll);

    for (px, py) in [(50.0, 30.0), (125.0, 75.0), (500.0, 300.0)] {
        nav.moved(Point::new(px, py), PREVIEW, &mut scroll);
        assert_abs_diff_eq!(scroll.horizontal.value, px * 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(scroll.vertical.value, py * 2.0, epsilon = 1e-3);
    }
}

#[test]
fn test_out_of_range_axis_keeps_previous_value() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    nav.press(PointerButton::Primary, Point::new(100.0, 100.0), PREVIEW, &mut scroll);

    // Dragged past the right edge: horizontal stays, vertical still follows.
    let outcome = nav.moved(Point::new(520.0, 120.0), PREVIEW, &mut scroll);
    assert!(!outcome.horizontal_applied);
    assert!(outcome.vertical_applied);
    assert_abs_diff_eq!(scroll.horizontal.value, 200.0, epsilon = 1e-4);
    assert_abs_diff_eq!(scroll.vertical.value, 240.0, epsilon = 1e-4);

    // Above and left of the preview: nothing changes, nothing to repaint.
    let outcome = nav.moved(Point::new(-5.0, -5.0), PREVIEW, &mut scroll);
    assert!(!outcome.needs_preview_repaint());
    assert_abs_diff_eq!(scroll.horizontal.value, 200.0, epsilon = 1e-4);
    assert_abs_diff_eq!(scroll.vertical.value, 240.0, epsilon = 1e-4);
}

#[test]
fn test_release_ends_drag() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    nav.press(PointerButton::Primary, Point::new(10.0, 10.0), PREVIEW, &mut scroll);
    nav.release(PointerButton::Primary);
    assert_eq!(nav.state(), DragState::Idle);

    let before = scroll;
    let outcome = nav.moved(Point::new(400.0, 200.0), PREVIEW, &mut scroll);
    assert_eq!(outcome, NavigationOutcome::IGNORED);
    assert_eq!(scroll, before);
}

#[test]
fn test_non_primary_release_keeps_dragging() {
    let mut nav = NavigationController::new();
    let mut scroll = stage_scroll();
    nav.press(PointerButton::Primary, Point::new(10.0, 10.0), PREVIEW, &mut scroll);
    nav.release(PointerButton::Middle);
    assert!(nav.is_dragging());
}

#[test]
fn test_zero_range_stage_never_moves() {
    let mut nav = NavigationController::new();
    let mut scroll = ScrollState::new(ScrollAxis::new(0.0, 0.0, 0.0), ScrollAxis::new(0.0, 0.0, 0.0));
    let outcome = nav.press(PointerButton::Primary, Point::new(250.0, 150.0), PREVIEW, &mut scroll);
    // 250 * 0 / 500 = 0, which is in range, so the value is re-applied unchanged.
    assert!(outcome.horizontal_applied);
    assert_eq!(scroll.horizontal.value, 0.0);
    assert_eq!(scroll.vertical.value, 0.0);
}
