//! Time-based tween animation over an observable float.
//!
//! An [`Animatable`] wraps a `MutableState<f32>` and interpolates it toward
//! a target over a fixed duration, one frame callback at a time. It never
//! blocks: each frame writes through the shared state, so observers (layout
//! coupling, rendering) see every intermediate value.

use slideover_core::{FrameCallbackRegistration, FrameClock, MutableState};
use std::cell::RefCell;
use std::rc::Rc;

/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * f64::from(fraction)
    }
}

/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material-style accelerate-then-decelerate curve. This is the default
    /// snap easing; it matches the stock property-animator feel on Android.
    FastOutSlowIn,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` through the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
        }
    }
}

/// Polynomial form of a unit cubic bezier, solved per-axis.
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn sample_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_x_derivative(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Finds the parametric `t` whose x equals `fraction`, then evaluates y.
    /// Newton-Raphson first, bisection when the derivative degenerates.
    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let mut t = fraction;
        for _ in 0..8 {
            let error = self.sample_x(t) - fraction;
            if error.abs() < 1e-6 {
                return self.sample_y(t);
            }
            let derivative = self.sample_x_derivative(t);
            if derivative.abs() < 1e-6 {
                break;
            }
            t = (t - error / derivative).clamp(0.0, 1.0);
        }

        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        t = fraction;
        for _ in 0..16 {
            let error = self.sample_x(t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.sample_y(t)
    }
}

/// Duration plus easing for a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

/// Animates a shared `MutableState<f32>` toward a target value.
///
/// Re-targeting mid-flight cancels the previous tween and starts from the
/// state's current value. `snap_to` cancels and writes immediately. Nothing
/// stops the underlying state being written by someone else while a tween
/// runs; the last writer wins.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    state: MutableState<f32>,
    clock: FrameClock,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl Animatable {
    pub fn new(state: MutableState<f32>, clock: FrameClock) -> Self {
        let initial = state.get();
        Self {
            inner: Rc::new(RefCell::new(AnimatableInner {
                state,
                clock,
                start: initial,
                target: initial,
                spec: AnimationSpec::linear(0),
                start_time_nanos: None,
                registration: None,
            })),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().state.get()
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Starts a tween from the state's current value to `target`.
    pub fn animate_to(&self, target: f32, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.state.get();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Cancels any in-flight tween and writes `value` immediately.
    pub fn snap_to(&self, value: f32) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = value;
            inner.target = value;
            inner.start_time_nanos = None;
            inner.state.clone()
        };
        state.set_value(value);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, frame_time_nanos);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let (state, new_value, finished) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let progress = inner.spec.easing.transform(linear_progress);

            let finished = linear_progress >= 1.0;
            let new_value = if finished {
                inner.start = inner.target;
                inner.start_time_nanos = None;
                inner.target
            } else {
                inner.start.lerp(&inner.target, progress)
            };
            (inner.state.clone(), new_value, finished)
        };

        // State writes happen outside the borrow so observers may read back.
        state.set_value(new_value);
        if !finished {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
