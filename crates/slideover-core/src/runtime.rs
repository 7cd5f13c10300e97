//! Frame-callback registry.
//!
//! The embedding loop (a windowing backend, a demo script, a test harness)
//! calls `drain_frame_callbacks` once per frame with the current frame time.
//! Callbacks are one-shot; anything that wants the next frame as well
//! re-registers from inside its callback, and those re-registrations run on
//! the *next* drain, never the current one.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

/// Cheap clonable handle to the runtime. All clones share one registry.
#[derive(Clone, Default)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

#[derive(Default)]
struct RuntimeInner {
    next_id: FrameCallbackId,
    callbacks: FxHashMap<FrameCallbackId, FrameCallback>,
    order: Vec<FrameCallbackId>,
}

impl RuntimeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for the next frame. The returned id can be used
    /// to cancel it before it fires.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.insert(id, Box::new(callback));
        inner.order.push(id);
        id
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        if inner.callbacks.remove(&id).is_some() {
            inner.order.retain(|candidate| *candidate != id);
        }
    }

    /// Runs every callback registered before this call, in registration
    /// order, passing the frame time in nanoseconds.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let (order, mut callbacks) = {
            let mut inner = self.inner.borrow_mut();
            (
                std::mem::take(&mut inner.order),
                std::mem::take(&mut inner.callbacks),
            )
        };
        if !order.is_empty() {
            log::trace!(
                "draining {} frame callback(s) at {}ns",
                order.len(),
                frame_time_nanos
            );
        }
        for id in order {
            if let Some(callback) = callbacks.remove(&id) {
                callback(frame_time_nanos);
            }
        }
    }

    /// True while anything is waiting on a frame (an animation in flight).
    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }
}
