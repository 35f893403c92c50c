//! Synchronous, single-threaded observable events.
//!
//! Listeners are called in registration order, synchronously, inside [`Event::raise_event`].
//! A raise iterates over a snapshot of the listener list, so listeners may add or remove
//! listeners (including themselves) while being called. A listener removed during a raise is
//! skipped if it has not been called yet.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<A> = Rc<dyn Fn(&A)>;

/// Identifies one registered listener of an [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registry<A> {
    listeners: RefCell<SmallVec<[(ListenerId, Listener<A>); 4]>>,
    next_id: Cell<u64>,
}

impl<A> Registry<A> {
    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|(lid, _)| *lid == id) {
            Some(pos) => {
                listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }
}

/// Observable event carrying arguments of type `A` to its listeners.
pub struct Event<A> {
    registry: Rc<Registry<A>>,
}

impl<A: 'static> Event<A> {
    /// Create an event with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                listeners: RefCell::new(SmallVec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Register `listener` and return its id for [`Event::remove_event_listener`].
    pub fn add_event_listener(&self, listener: impl Fn(&A) + 'static) -> ListenerId {
        let id = ListenerId(self.registry.next_id.get());
        self.registry.next_id.set(id.0 + 1);
        let listener: Listener<A> = Rc::new(listener);
        self.registry.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Unregister a listener. Returns `false` when `id` is not registered.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.registry.remove(id)
    }

    /// Register `listener` for as long as the returned [`Subscription`] is alive.
    pub fn subscribe(&self, listener: impl Fn(&A) + 'static) -> Subscription {
        let id = self.add_event_listener(listener);
        let registry: Weak<Registry<A>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.remove(id);
                }
            })),
        }
    }

    /// Number of currently registered listeners.
    pub fn number_of_listeners(&self) -> usize {
        self.registry.listeners.borrow().len()
    }

    /// Call every registered listener with `args`.
    pub fn raise_event(&self, args: &A) {
        let snapshot: SmallVec<[(ListenerId, Listener<A>); 4]> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        for (id, listener) in snapshot {
            if self.registry.contains(id) {
                listener(args);
            }
        }
    }
}

impl<A: 'static> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.registry.listeners.borrow().len())
            .finish()
    }
}

/// RAII listener registration returned by [`Event::subscribe`].
///
/// Dropping the subscription removes the listener. It holds no strong reference to the event,
/// so it never keeps the event's owner alive.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the listener now.
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

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/event.rs"]
mod tests;
