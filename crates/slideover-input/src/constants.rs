//! Shared gesture constants.

/// Drag threshold in logical pixels.
///
/// Until the pointer has moved further than this from where it went down,
/// the gesture is still a tap: the panel does not claim it and a release
/// falls through to whatever sits underneath.
///
/// 8.0 is large enough to ignore finger jitter on touch screens and small
/// enough to feel responsive, and matches common platform defaults
/// (Android's ViewConfiguration touch slop is ~8dp at baseline density).
/// Embedders on unusual densities can override it per panel.
pub const TOUCH_SLOP: f32 = 8.0;
