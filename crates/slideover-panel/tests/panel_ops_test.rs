//! Programmatic operations, cancel semantics, degraded wiring and
//! malformed event streams.

use slideover_panel::{PanelConfig, PanelError, SlidingPanel, Surface, SurfaceRegistry};
use slideover_core::RuntimeHandle;
use slideover_testing::PanelRobot;
use std::rc::Rc;

const ABOVE_WIDTH: f32 = 600.0;
const BELOW_WIDTH: f32 = 300.0;

#[test]
fn force_close_is_immediate_and_exact() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);
    robot.panel().force_open();
    assert_eq!(robot.above_x(), -BELOW_WIDTH);

    robot.panel().force_close();
    assert_eq!(robot.above_x(), 0.0);
    assert!(
        !robot.runtime().has_frame_callbacks(),
        "force operations must not animate"
    );
    assert!(robot.recorded().is_empty(), "force operations are silent");
}

#[test]
fn force_open_is_immediate_and_exact() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);
    robot.panel().force_open();
    assert_eq!(robot.above_x(), -BELOW_WIDTH);
    assert!(!robot.runtime().has_frame_callbacks());
}

#[test]
fn force_close_cancels_an_in_flight_snap() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);

    robot.press(0.0);
    robot.advance_ms(400);
    robot.move_to(-200.0);
    robot.release();
    assert!(robot.panel_ref().is_snapping());

    robot.panel().force_close();
    assert_eq!(robot.above_x(), 0.0);
    robot.advance_frames(30);
    assert_eq!(robot.above_x(), 0.0, "cancelled snap must not keep writing");
}

#[test]
fn animate_close_from_open_is_animated() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);
    robot.panel().force_open();

    robot.panel().animate_close();
    assert!(robot.panel_ref().is_snapping());
    let mut saw_intermediate = false;
    for _ in 0..30 {
        robot.advance_frames(1);
        let x = robot.above_x();
        if x > -300.0 && x < 0.0 {
            saw_intermediate = true;
        }
        if !robot.runtime().has_frame_callbacks() {
            break;
        }
    }
    assert!(saw_intermediate);
    assert_eq!(robot.above_x(), 0.0);
}

#[test]
fn animate_close_when_already_closed_is_a_no_op() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);
    assert_eq!(robot.above_x(), 0.0);

    robot.panel().animate_close();
    assert!(
        !robot.runtime().has_frame_callbacks(),
        "no animation should start at offset 0"
    );
}

#[test]
fn cancel_mid_slide_abandons_the_gesture_silently() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);

    robot.press(0.0);
    robot.move_to(-120.0);
    assert!(robot.panel_ref().is_sliding());

    assert!(robot.cancel(), "cancel of a claimed gesture is consumed");
    assert!(!robot.panel_ref().is_sliding());
    assert_eq!(robot.above_x(), -120.0, "no snap on cancel");
    assert!(
        !robot.runtime().has_frame_callbacks(),
        "no animation on cancel"
    );
    let ends = robot.listener().ends();
    assert!(ends.is_empty(), "cancel never reports an outcome");
}

#[test]
fn cancel_without_a_claimed_gesture_passes_through() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);
    assert!(!robot.cancel());

    robot.press(0.0);
    assert!(!robot.cancel(), "tracking-only session is not a claim");
}

#[test]
fn gesture_works_again_after_cancel() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);

    robot.press(0.0);
    robot.move_to(-120.0);
    robot.cancel();

    robot.swipe(-120.0, -320.0, 4, 100);
    robot.settle();
    assert_eq!(robot.above_x(), -BELOW_WIDTH);
}

#[test]
fn move_and_up_without_a_down_are_tolerated() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);

    assert!(!robot.move_to(-100.0));
    assert!(!robot.release());
    assert_eq!(robot.above_x(), 0.0);
    assert!(robot.recorded().is_empty());
}

#[test]
fn new_gesture_during_snap_still_tracks_the_pointer() {
    let mut robot = PanelRobot::new(ABOVE_WIDTH, BELOW_WIDTH);

    robot.press(0.0);
    robot.advance_ms(400);
    robot.move_to(-200.0);
    robot.release(); // snap-open scheduled but not yet pumped

    robot.press(-200.0);
    robot.move_to(-250.0);
    assert_eq!(
        robot.above_x(),
        -250.0,
        "drag writes win while no frame has run"
    );
}

#[test]
fn missing_above_surface_fails_construction() {
    let registry = SurfaceRegistry::new();
    let result = SlidingPanel::new(
        &registry,
        PanelConfig::new("above"),
        RuntimeHandle::new(),
    );
    assert!(matches!(result, Err(PanelError::AboveSurfaceUnbound(_))));
}

#[test]
fn unresolvable_below_surface_degrades_instead_of_failing() {
    let mut registry = SurfaceRegistry::new();
    registry.insert(Surface::new("above", ABOVE_WIDTH));

    let panel = SlidingPanel::new(
        &registry,
        PanelConfig::new("above").with_below_surface("below"),
        RuntimeHandle::new(),
    )
    .expect("missing below surface is not fatal");
    assert!(!panel.is_slide_enabled());
}

#[test]
fn custom_touch_slop_is_honoured() {
    let runtime = RuntimeHandle::new();
    let mut registry = SurfaceRegistry::new();
    let above = Surface::new("above", ABOVE_WIDTH);
    registry.insert(Rc::clone(&above));
    registry.insert(Surface::new("below", BELOW_WIDTH));

    let mut panel = SlidingPanel::new(
        &registry,
        PanelConfig::new("above")
            .with_below_surface("below")
            .with_touch_slop(20.0),
        runtime,
    )
    .expect("surfaces registered");

    use slideover_input::PointerEvent;
    panel.handle_pointer_event(&PointerEvent::down(0.0, 0));
    assert!(!panel.handle_pointer_event(&PointerEvent::moved(-15.0, 10)));
    assert_eq!(above.x(), 0.0);
    assert!(panel.handle_pointer_event(&PointerEvent::moved(-25.0, 20)));
    assert_eq!(above.x(), -25.0);
}
