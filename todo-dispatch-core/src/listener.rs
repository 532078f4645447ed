//! Listener registry and subscription handles

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A callback invoked after every dispatch
///
/// Listeners take no arguments; they read the new state back from the store.
pub type Listener = Rc<dyn Fn()>;

/// Ordered set of listeners keyed by a monotonically assigned id
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    /// Register a listener at the end of the notification order
    pub(crate) fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener, returning whether it was still registered
    pub(crate) fn remove(&mut self, id: u64) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Copy of the current listeners in registration order
    ///
    /// Notification iterates this copy, so registry changes made by a
    /// listener only take effect on the next dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Call [`unsubscribe`](Subscription::unsubscribe) to stop receiving
/// notifications. Dropping the handle leaves the listener registered.
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, listeners: &Rc<RefCell<Listeners>>) -> Self {
        Self {
            id,
            listeners: Rc::downgrade(listeners),
        }
    }

    /// Remove exactly this listener from the store
    ///
    /// Calling it again, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        if listeners.borrow_mut().remove(self.id) {
            tracing::trace!(listener = self.id, "listener removed");
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.borrow().contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
