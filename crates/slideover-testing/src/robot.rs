//! Robot-style driver for a panel under test.
//!
//! Owns the runtime, the surfaces and the panel, scripts pointer streams
//! with an explicit millisecond clock (so gesture velocity is exact), and
//! pumps frame callbacks deterministically for animation assertions.

use crate::recording::{ListenerEvent, RecordingListener};
use slideover_core::RuntimeHandle;
use slideover_input::{PointerDispatcher, PointerEvent};
use slideover_panel::{PanelConfig, SlidingListener, SlidingPanel, Surface, SurfaceRegistry};
use std::rc::Rc;

/// Frame pumping step, ~60 FPS.
pub const FRAME_STEP_NANOS: u64 = 16_666_667;

pub struct PanelRobot {
    runtime: RuntimeHandle,
    panel: SlidingPanel,
    above: Rc<Surface>,
    below: Option<Rc<Surface>>,
    listener: Rc<RecordingListener>,
    dispatcher: PointerDispatcher,
    clock_ms: u64,
    frame_time_nanos: u64,
    pointer_x: f32,
}

impl PanelRobot {
    /// Panel with both surfaces bound; sliding enabled.
    pub fn new(above_width: f32, below_width: f32) -> Self {
        Self::build(above_width, Some(below_width))
    }

    /// Panel with no below surface; degraded mode, sliding disabled.
    pub fn without_below(above_width: f32) -> Self {
        Self::build(above_width, None)
    }

    fn build(above_width: f32, below_width: Option<f32>) -> Self {
        let runtime = RuntimeHandle::new();
        let mut registry = SurfaceRegistry::new();
        let above = Surface::new("above", above_width);
        registry.insert(Rc::clone(&above));
        let below = below_width.map(|width| {
            let surface = Surface::new("below", width);
            registry.insert(Rc::clone(&surface));
            surface
        });

        let mut config = PanelConfig::new("above");
        if below.is_some() {
            config = config.with_below_surface("below");
        }
        let mut panel = SlidingPanel::new(&registry, config, runtime.clone())
            .expect("above surface is registered");
        let listener = RecordingListener::new();
        panel.set_listener(Rc::clone(&listener) as Rc<dyn SlidingListener>);

        Self {
            runtime,
            panel,
            above,
            below,
            listener,
            dispatcher: PointerDispatcher::new(),
            clock_ms: 0,
            frame_time_nanos: 0,
            pointer_x: 0.0,
        }
    }

    /// Advances the robot's pointer-event clock without emitting events.
    pub fn advance_ms(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    pub fn press(&mut self, x: f32) -> bool {
        self.pointer_x = x;
        self.dispatch(PointerEvent::down(x, self.clock_ms))
    }

    pub fn move_to(&mut self, x: f32) -> bool {
        self.pointer_x = x;
        self.dispatch(PointerEvent::moved(x, self.clock_ms))
    }

    pub fn move_by(&mut self, dx: f32) -> bool {
        let x = self.pointer_x + dx;
        self.move_to(x)
    }

    pub fn release(&mut self) -> bool {
        self.dispatch(PointerEvent::up(self.pointer_x, self.clock_ms))
    }

    pub fn cancel(&mut self) -> bool {
        self.dispatch(PointerEvent::cancel(self.clock_ms))
    }

    /// Full gesture: press at `from`, move to `to` in `steps` equal moves
    /// spread over `duration_ms`, release. Velocity at release is
    /// `(to - from) / duration_ms`.
    pub fn swipe(&mut self, from: f32, to: f32, steps: u64, duration_ms: u64) {
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            self.advance_ms(duration_ms / steps);
            let fraction = step as f32 / steps as f32;
            self.move_to(from + (to - from) * fraction);
        }
        self.release();
    }

    fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.dispatcher.push(event);
        let panel = &mut self.panel;
        let mut consumed = false;
        self.dispatcher
            .drain(|event| consumed = panel.handle_pointer_event(&event));
        consumed
    }

    /// Pumps `frames` frame callbacks at ~60 FPS.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame_time_nanos += FRAME_STEP_NANOS;
            self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        }
    }

    /// Pumps frames until no animation is pending (bounded, so a runaway
    /// animation fails the test instead of hanging it).
    pub fn settle(&mut self) {
        let mut budget = 600;
        while self.runtime.has_frame_callbacks() && budget > 0 {
            self.advance_frames(1);
            budget -= 1;
        }
        assert!(
            !self.runtime.has_frame_callbacks(),
            "animation did not settle within the frame budget"
        );
    }

    pub fn above_x(&self) -> f32 {
        self.above.x()
    }

    pub fn below_x(&self) -> Option<f32> {
        self.below.as_ref().map(|surface| surface.x())
    }

    pub fn panel(&mut self) -> &mut SlidingPanel {
        &mut self.panel
    }

    pub fn panel_ref(&self) -> &SlidingPanel {
        &self.panel
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn recorded(&self) -> Vec<ListenerEvent> {
        self.listener.events()
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }
}
