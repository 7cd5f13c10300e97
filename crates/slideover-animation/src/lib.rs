//! Eased tween animations driven by the frame clock.

mod animation;

pub use animation::{Animatable, AnimationSpec, Easing, Lerp};
