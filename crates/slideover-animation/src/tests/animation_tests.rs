use super::*;

use slideover_core::RuntimeHandle;

const FRAME_STEP_NANOS: u64 = 16_666_667; // ~60 FPS

fn pump(runtime: &RuntimeHandle, frame_time: &mut u64, frames: usize) {
    for _ in 0..frames {
        *frame_time += FRAME_STEP_NANOS;
        runtime.drain_frame_callbacks(*frame_time);
    }
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_endpoints_are_pinned() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];
    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "end should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn easing_is_monotonic_within_unit_interval() {
    for easing in [Easing::EaseInOut, Easing::FastOutSlowIn] {
        let mut previous = 0.0f32;
        for step in 1..=100 {
            let value = easing.transform(step as f32 / 100.0);
            assert!(
                value >= previous - 1e-4,
                "{:?} decreased at step {}",
                easing,
                step
            );
            previous = value;
        }
    }
}

#[test]
fn tween_reaches_target_through_intermediate_values() {
    let runtime = RuntimeHandle::new();
    let state = MutableState::new(0.0f32);
    let animatable = Animatable::new(state.clone(), FrameClock::new(runtime.clone()));

    animatable.animate_to(-300.0, AnimationSpec::tween(200, Easing::FastOutSlowIn));
    assert!(animatable.is_running());

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !runtime.has_frame_callbacks() {
            break;
        }
        pump(&runtime, &mut frame_time, 1);
        let value = state.get();
        if value < -1.0 && value > -299.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "tween should report intermediate values");
    assert_eq!(state.get(), -300.0);
    assert!(!animatable.is_running());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn snap_to_cancels_in_flight_tween() {
    let runtime = RuntimeHandle::new();
    let state = MutableState::new(0.0f32);
    let animatable = Animatable::new(state.clone(), FrameClock::new(runtime.clone()));

    animatable.animate_to(-300.0, AnimationSpec::linear(200));
    let mut frame_time = 0u64;
    pump(&runtime, &mut frame_time, 3);
    assert!(state.get() < 0.0);

    animatable.snap_to(0.0);
    assert_eq!(state.get(), 0.0);
    assert!(!animatable.is_running());

    pump(&runtime, &mut frame_time, 20);
    assert_eq!(state.get(), 0.0, "cancelled tween must not keep writing");
}

#[test]
fn retargeting_restarts_from_current_value() {
    let runtime = RuntimeHandle::new();
    let state = MutableState::new(0.0f32);
    let animatable = Animatable::new(state.clone(), FrameClock::new(runtime.clone()));

    animatable.animate_to(-300.0, AnimationSpec::linear(200));
    let mut frame_time = 0u64;
    pump(&runtime, &mut frame_time, 4);
    let partway = state.get();
    assert!(partway < 0.0 && partway > -300.0);

    animatable.animate_to(0.0, AnimationSpec::linear(200));
    assert_eq!(animatable.target(), 0.0);
    pump(&runtime, &mut frame_time, 20);
    assert_eq!(state.get(), 0.0);
}

#[test]
fn zero_duration_tween_lands_within_a_frame_of_starting() {
    let runtime = RuntimeHandle::new();
    let state = MutableState::new(5.0f32);
    let animatable = Animatable::new(state.clone(), FrameClock::new(runtime.clone()));

    animatable.animate_to(0.0, AnimationSpec::linear(0));
    let mut frame_time = 0u64;
    // First frame establishes the start time, second completes the tween.
    pump(&runtime, &mut frame_time, 2);
    assert_eq!(state.get(), 0.0);
    assert!(!runtime.has_frame_callbacks());
}
