//! Pointer event model for the slideover widget kit.
//!
//! The panel only ever interprets horizontal position, so events carry a
//! single `x` coordinate plus a timestamp; the producing backend decides
//! what those mean (logical pixels, milliseconds since launch).

mod constants;
mod dispatcher;
mod types;

pub use constants::TOUCH_SLOP;
pub use dispatcher::PointerDispatcher;
pub use types::{PointerEvent, PointerEventKind};
