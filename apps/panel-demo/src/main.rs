//! Headless demo of the reveal panel.
//!
//! Wires a content surface over an actions tray, scripts a slow drag past
//! halfway (snap open) followed by a fast rightward flick (snap closed),
//! and logs surface offsets as the frame loop pumps. Run with
//! `RUST_LOG=debug` to see the gesture machine's own transitions too.

use slideover_core::RuntimeHandle;
use slideover_input::{PointerDispatcher, PointerEvent};
use slideover_panel::{
    PanelConfig, PanelError, SlideDirection, SlideStatus, SlidingListener, SlidingPanel, Surface,
    SurfaceRegistry,
};
use std::rc::Rc;

const FRAME_STEP_NANOS: u64 = 16_666_667;

struct LoggingListener;

impl SlidingListener for LoggingListener {
    fn on_start_sliding(&self, direction: SlideDirection) {
        log::info!("sliding started, direction {direction:?}");
    }

    fn on_end_sliding(&self, status: SlideStatus) {
        log::info!("sliding ended, panel {status:?}");
    }
}

struct Demo {
    runtime: RuntimeHandle,
    panel: SlidingPanel,
    above: Rc<Surface>,
    below: Rc<Surface>,
    dispatcher: PointerDispatcher,
    clock_ms: u64,
    frame_time_nanos: u64,
}

impl Demo {
    fn new() -> Result<Self, PanelError> {
        let runtime = RuntimeHandle::new();
        let mut registry = SurfaceRegistry::new();
        let above = Surface::new("content", 600.0);
        let below = Surface::new("actions", 300.0);
        registry.insert(Rc::clone(&above));
        registry.insert(Rc::clone(&below));

        let config = PanelConfig::new("content").with_below_surface("actions");
        let mut panel = SlidingPanel::new(&registry, config, runtime.clone())?;
        panel.set_listener(Rc::new(LoggingListener));

        Ok(Self {
            runtime,
            panel,
            above,
            below,
            dispatcher: PointerDispatcher::new(),
            clock_ms: 0,
            frame_time_nanos: 0,
        })
    }

    fn send(&mut self, event: PointerEvent) {
        self.dispatcher.push(event);
        let panel = &mut self.panel;
        self.dispatcher.drain(|event| {
            let consumed = panel.handle_pointer_event(&event);
            log::debug!(
                "{:?} at x={} -> consumed={consumed}",
                event.kind,
                event.x
            );
        });
    }

    fn pump_until_settled(&mut self) {
        while self.runtime.has_frame_callbacks() {
            self.frame_time_nanos += FRAME_STEP_NANOS;
            self.clock_ms += FRAME_STEP_NANOS / 1_000_000;
            self.runtime.drain_frame_callbacks(self.frame_time_nanos);
            log::info!(
                "frame: content at {:.1}, actions at {:.1}",
                self.above.x(),
                self.below.x()
            );
        }
    }

    fn drag(&mut self, from: f32, to: f32, steps: u64, duration_ms: u64) {
        self.send(PointerEvent::down(from, self.clock_ms));
        for step in 1..=steps {
            self.clock_ms += duration_ms / steps;
            let fraction = step as f32 / steps as f32;
            self.send(PointerEvent::moved(
                from + (to - from) * fraction,
                self.clock_ms,
            ));
        }
        self.send(PointerEvent::up(to, self.clock_ms));
    }
}

fn main() {
    env_logger::init();

    let mut demo = match Demo::new() {
        Ok(demo) => demo,
        Err(error) => {
            log::error!("panel setup failed: {error}");
            std::process::exit(1);
        }
    };

    log::info!("slow drag past halfway; release snaps open");
    demo.drag(0.0, -200.0, 8, 400);
    demo.pump_until_settled();

    log::info!("fast rightward flick; release snaps closed");
    demo.drag(-200.0, 0.0, 4, 100);
    demo.pump_until_settled();

    log::info!(
        "done: content at {:.1}, actions at {:.1}",
        demo.above.x(),
        demo.below.x()
    );
}
