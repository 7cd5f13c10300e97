//! The gesture state machine.
//!
//! Consumes a pointer stream (down, move*, up/cancel) and produces live
//! offset writes on the above surface during the drag plus a single
//! open/closed outcome on release. Three states: idle (no session),
//! tracking (session open, movement still within slop) and sliding
//! (gesture claimed). Taps never leave tracking, so their events pass
//! through unconsumed and targets underneath keep working.

use crate::behavior::RightEdgeBehavior;
use crate::error::PanelError;
use crate::surface::{Surface, SurfaceId, SurfaceRegistry};
use slideover_animation::{Animatable, AnimationSpec, Easing};
use slideover_core::{FrameClock, RuntimeHandle};
use slideover_input::{PointerEvent, PointerEventKind, TOUCH_SLOP};
use std::rc::Rc;

/// Snap animation length in milliseconds.
pub const SNAP_DURATION_MS: u64 = 200;

/// Gesture speed past which a release snaps regardless of position, in
/// logical pixels per millisecond. A flick faster than this leftward from
/// closed always opens; faster than this rightward from open always closes.
const FLING_VELOCITY: f32 = 1.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStatus {
    Open,
    Closed,
}

/// Callbacks into the embedding application.
pub trait SlidingListener {
    /// Fired once per gesture, when movement first exceeds the touch slop.
    fn on_start_sliding(&self, direction: SlideDirection);

    /// Fired once per completed (non-cancelled) gesture that reached the
    /// sliding state. The status reflects the offset at the moment of
    /// release, not the snap animation's target; a fast flick can report
    /// one while animating toward the other.
    fn on_end_sliding(&self, status: SlideStatus);
}

/// Declarative panel configuration, read once at composition.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    /// Required foreground surface. Unresolvable id fails construction.
    pub above_surface: SurfaceId,
    /// Optional background surface. Absent (or unresolvable) means there is
    /// nothing to reveal and leftward sliding is disabled.
    pub below_surface: Option<SurfaceId>,
    pub touch_slop: f32,
    pub snap_duration_ms: u64,
}

impl PanelConfig {
    pub fn new(above_surface: impl Into<SurfaceId>) -> Self {
        Self {
            above_surface: above_surface.into(),
            below_surface: None,
            touch_slop: TOUCH_SLOP,
            snap_duration_ms: SNAP_DURATION_MS,
        }
    }

    pub fn with_below_surface(mut self, id: impl Into<SurfaceId>) -> Self {
        self.below_surface = Some(id.into());
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }
}

/// Per-gesture state, created on pointer-down and dropped on up/cancel.
struct DragSession {
    /// Pointer x at down; velocity is measured against this.
    start_x: f32,
    /// Pointer x at the previous sliding move. Deliberately left at the
    /// down position until slop is exceeded, so pre-slop movement
    /// accumulates from the down point instead of resetting per event.
    last_x: f32,
    start_time_ms: u64,
    /// Above-surface offset at down; distinguishes a gesture that started
    /// closed from one that started open for the fling rules.
    above_start_x: f32,
    /// Monotonic within a session: set once, never cleared mid-gesture.
    is_sliding: bool,
    direction: Option<SlideDirection>,
}

/// The draggable reveal panel.
///
/// Owns both surface references for the duration of its life; the surfaces
/// come from the registry at composition time and outlive any one gesture.
pub struct SlidingPanel {
    above: Rc<Surface>,
    below: Option<Rc<Surface>>,
    _behavior: Option<RightEdgeBehavior>,
    offset_anim: Animatable,
    slide_enabled: bool,
    touch_slop: f32,
    snap_duration_ms: u64,
    session: Option<DragSession>,
    listener: Option<Rc<dyn SlidingListener>>,
}

impl SlidingPanel {
    /// Resolves the configured surfaces and wires the layout coupling.
    ///
    /// A missing above surface is a fatal configuration error. A missing
    /// below surface is degraded mode: the panel stays usable but absorbs
    /// leftward drags without visual effect.
    pub fn new(
        registry: &SurfaceRegistry,
        config: PanelConfig,
        runtime: RuntimeHandle,
    ) -> Result<Self, PanelError> {
        let above = registry
            .get(&config.above_surface)
            .ok_or_else(|| PanelError::AboveSurfaceUnbound(config.above_surface.clone()))?;

        let below = match &config.below_surface {
            Some(id) => {
                let found = registry.get(id);
                if found.is_none() {
                    log::warn!("below surface {id} not bound; sliding disabled");
                }
                found
            }
            None => None,
        };

        let behavior = below
            .as_ref()
            .map(|surface| RightEdgeBehavior::attach(Rc::clone(surface), &above));

        let offset_anim = Animatable::new(above.offset(), FrameClock::new(runtime));

        Ok(Self {
            slide_enabled: below.is_some(),
            above,
            below,
            _behavior: behavior,
            offset_anim,
            touch_slop: config.touch_slop,
            snap_duration_ms: config.snap_duration_ms,
            session: None,
            listener: None,
        })
    }

    pub fn set_listener(&mut self, listener: Rc<dyn SlidingListener>) {
        self.listener = Some(listener);
    }

    pub fn is_slide_enabled(&self) -> bool {
        self.slide_enabled
    }

    /// Enables or disables leftward reveal. Forced off while no below
    /// surface is bound, whatever the caller asks for.
    pub fn set_slide_enabled(&mut self, enabled: bool) {
        self.slide_enabled = enabled && self.below.is_some();
    }

    /// True while the panel has claimed the current gesture. Parent
    /// dispatchers should treat the panel as the exclusive owner of the
    /// event stream whenever this holds, including for handled-it queries.
    pub fn is_sliding(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.is_sliding)
            .unwrap_or(false)
    }

    /// Feeds one pointer event through the state machine. Returns whether
    /// the event was consumed; unconsumed events should continue through
    /// normal dispatch so taps beneath the panel keep working.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        self.session = Some(DragSession {
            start_x: event.x,
            last_x: event.x,
            start_time_ms: event.timestamp_ms,
            above_start_x: self.above.x(),
            is_sliding: false,
            direction: None,
        });
        // Never consumed: a down might still turn out to be a plain tap.
        false
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        // Move without a down: tolerated no-op pass-through.
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let move_distance = event.x - session.last_x;
        if !session.is_sliding && move_distance.abs() > self.touch_slop {
            session.is_sliding = true;
            let direction = if move_distance < 0.0 {
                SlideDirection::Left
            } else {
                SlideDirection::Right
            };
            session.direction = Some(direction);
            log::debug!("gesture claimed, direction {direction:?}");
            if let Some(listener) = &self.listener {
                listener.on_start_sliding(direction);
            }
        }

        if !session.is_sliding {
            return false;
        }

        let temp_x = self.above.x() + move_distance;
        let new_x = if temp_x >= 0.0 {
            // Cannot drag past fully closed to the right.
            0.0
        } else if self.slide_enabled {
            match &self.below {
                Some(below) => temp_x.max(-below.width()),
                None => 0.0,
            }
        } else {
            // Leftward drag with reveal disabled is absorbed.
            0.0
        };
        self.above.set_x(new_x);
        session.last_x = event.x;
        event.consume();
        true
    }

    fn on_up(&mut self, event: &PointerEvent) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        if !session.is_sliding {
            // A tap: fall through so whatever is underneath sees the up.
            return false;
        }

        let release_x = self.above.x();
        let elapsed_ms = event.timestamp_ms.saturating_sub(session.start_time_ms).max(1);
        let velocity = (event.x - session.start_x) / elapsed_ms as f32;

        if self.slide_enabled {
            if let Some(below) = &self.below {
                let open_x = -below.width();
                let started_closed = session.above_start_x == 0.0;
                let target_x = if started_closed && velocity < -FLING_VELOCITY {
                    open_x
                } else if !started_closed && velocity > FLING_VELOCITY {
                    0.0
                } else if release_x < open_x / 2.0 {
                    open_x
                } else {
                    0.0
                };
                log::debug!(
                    "release at {release_x} ({:?} gesture) with velocity {velocity} px/ms, snapping to {target_x}",
                    session.direction
                );
                self.offset_anim.animate_to(
                    target_x,
                    AnimationSpec::tween(self.snap_duration_ms, Easing::FastOutSlowIn),
                );
            }
        }

        // Outcome reflects the offset at release, not the snap target.
        let status = if release_x < 0.0 {
            SlideStatus::Open
        } else {
            SlideStatus::Closed
        };
        if let Some(listener) = &self.listener {
            listener.on_end_sliding(status);
        }
        event.consume();
        true
    }

    fn on_cancel(&mut self, event: &PointerEvent) -> bool {
        // Abandon the gesture: no snap decision, no listener callback.
        let was_sliding = self
            .session
            .take()
            .map(|session| session.is_sliding)
            .unwrap_or(false);
        if was_sliding {
            log::debug!("gesture cancelled mid-slide");
            event.consume();
        }
        was_sliding
    }

    /// Snaps fully closed immediately, with no animation.
    pub fn force_close(&mut self) {
        self.offset_anim.snap_to(0.0);
        self.session = None;
    }

    /// Snaps fully open immediately, with no animation. With no below
    /// surface there is no open extent, so only the gesture state resets.
    pub fn force_open(&mut self) {
        match &self.below {
            Some(below) => self.offset_anim.snap_to(-below.width()),
            None => log::debug!("force_open ignored: no below surface"),
        }
        self.session = None;
    }

    /// Animates closed over the snap duration. No-op when already closed.
    pub fn animate_close(&mut self) {
        if self.above.x() < 0.0 {
            self.offset_anim.animate_to(
                0.0,
                AnimationSpec::tween(self.snap_duration_ms, Easing::FastOutSlowIn),
            );
        }
        self.session = None;
    }

    pub fn above_surface(&self) -> &Rc<Surface> {
        &self.above
    }

    pub fn below_surface(&self) -> Option<&Rc<Surface>> {
        self.below.as_ref()
    }

    /// True while the release snap (or `animate_close`) is still animating.
    pub fn is_snapping(&self) -> bool {
        self.offset_anim.is_running()
    }
}
