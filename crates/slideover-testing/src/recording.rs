use slideover_panel::{SlideDirection, SlideStatus, SlidingListener};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded listener callback, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerEvent {
    Start(SlideDirection),
    End(SlideStatus),
}

/// Listener that records every callback for later assertions.
#[derive(Default)]
pub struct RecordingListener {
    events: RefCell<Vec<ListenerEvent>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    pub fn starts(&self) -> Vec<SlideDirection> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::Start(direction) => Some(*direction),
                ListenerEvent::End(_) => None,
            })
            .collect()
    }

    pub fn ends(&self) -> Vec<SlideStatus> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::End(status) => Some(*status),
                ListenerEvent::Start(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SlidingListener for RecordingListener {
    fn on_start_sliding(&self, direction: SlideDirection) {
        self.events.borrow_mut().push(ListenerEvent::Start(direction));
    }

    fn on_end_sliding(&self, status: SlideStatus) {
        self.events.borrow_mut().push(ListenerEvent::End(status));
    }
}
