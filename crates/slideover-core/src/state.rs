//! Observable value cells.
//!
//! `MutableState<T>` is the one channel through which gesture handling and
//! layout observe each other: a write notifies every live subscriber with
//! the new value, synchronously, on the calling thread. Subscriptions are
//! explicit objects and detach when dropped.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type SubscriptionId = u64;

type Subscriber<T> = (SubscriptionId, Rc<dyn Fn(&T)>);

pub struct MutableState<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

struct StateInner<T> {
    value: T,
    next_subscription: SubscriptionId,
    subscribers: SmallVec<[Subscriber<T>; 2]>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner {
                value,
                next_subscription: 0,
                subscribers: SmallVec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores the value and notifies every subscriber with it.
    ///
    /// The inner borrow is released before subscribers run, so a subscriber
    /// may freely read this state or write *other* states.
    pub fn set_value(&self, value: T) {
        let subscribers: SmallVec<[Rc<dyn Fn(&T)>; 2]> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner
                .subscribers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect()
        };
        for callback in subscribers {
            callback(&value);
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Registers an observer for future writes. The observer stays live for
    /// as long as the returned `Subscription` is held.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscription;
            inner.next_subscription += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .subscribers
                        .retain(|(subscriber_id, _)| *subscriber_id != id);
                }
            })),
        }
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view over a `MutableState`.
pub struct State<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Detaches its observer when dropped.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detaches immediately instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
