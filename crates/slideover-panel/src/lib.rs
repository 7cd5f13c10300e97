//! Horizontally-draggable reveal panel.
//!
//! Two surfaces stack: a draggable `above` surface covers a stationary
//! `below` surface. Dragging the above surface left reveals the below one;
//! releasing snaps fully open or fully closed based on where the drag ended
//! and how fast it was moving. [`SlidingPanel`] is the gesture state machine
//! that turns a raw pointer stream into those decisions;
//! [`RightEdgeBehavior`] keeps the below surface glued to the above
//! surface's trailing edge while it moves.

mod behavior;
mod error;
mod sliding;
mod surface;

pub use behavior::RightEdgeBehavior;
pub use error::PanelError;
pub use sliding::{
    PanelConfig, SlideDirection, SlideStatus, SlidingListener, SlidingPanel, SNAP_DURATION_MS,
};
pub use surface::{Surface, SurfaceId, SurfaceRegistry};
