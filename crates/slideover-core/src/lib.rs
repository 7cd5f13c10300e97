//! Core runtime for the slideover widget kit.
//!
//! Everything here is single-threaded: pointer events, state writes and
//! frame callbacks all happen on one logical UI thread, so the runtime is
//! built from `Rc`/`RefCell` and needs no locking.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, RuntimeHandle};
pub use state::{MutableState, State, Subscription, SubscriptionId};
