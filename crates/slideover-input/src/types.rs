use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A handler that claims a gesture consumes its events so handlers further
/// down the dispatch chain (a click target under the panel, say) do not also
/// act on them. The flag is shared across clones of the event via
/// `Rc<Cell>`, so consumption observed anywhere is observed everywhere.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Horizontal pointer position in logical pixels.
    pub x: f32,
    /// Timestamp in milliseconds, monotonic per event stream.
    pub timestamp_ms: u64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, timestamp_ms: u64) -> Self {
        Self {
            kind,
            x,
            timestamp_ms,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, x, timestamp_ms)
    }

    pub fn moved(x: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, x, timestamp_ms)
    }

    pub fn up(x: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, x, timestamp_ms)
    }

    pub fn cancel(timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, 0.0, timestamp_ms)
    }

    /// Marks the event as consumed for every holder of a clone.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
