//! Screen-wide pointer listeners for click-outside detection.
//!
//! Components that need to know about presses landing *outside* their own
//! area subscribe here when they are mounted. The runtime reports every left
//! press through [`PointerListeners::dispatch_press`]; each subscription whose
//! bounds do not contain the press records it until the owner drains it with
//! [`PointerSubscription::take_outside_press`].
//!
//! A subscription deregisters itself when dropped, so holding the guard for
//! the lifetime of a mounted component keeps registration and removal
//! symmetric.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

#[derive(Debug, Default)]
struct ListenerEntry {
    bounds: Rect,
    outside_press: bool,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: BTreeMap<u64, ListenerEntry>,
}

/// Registry of active click-outside subscriptions.
#[derive(Debug, Default, Clone)]
pub struct PointerListeners {
    inner: Rc<RefCell<Registry>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener. The returned guard removes it on drop.
    pub fn subscribe(&self) -> PointerSubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.insert(id, ListenerEntry::default());
        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Record a press at `(column, row)` against every listener whose bounds
    /// do not contain it.
    pub fn dispatch_press(&self, column: u16, row: u16) {
        let position = Position::new(column, row);
        for entry in self.inner.borrow_mut().entries.values_mut() {
            if !entry.bounds.contains(position) {
                entry.outside_press = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a single click-outside listener.
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl PointerSubscription {
    /// Update the area considered "inside" for this listener.
    pub fn set_bounds(&self, bounds: Rect) {
        if let Some(registry) = self.registry.upgrade()
            && let Some(entry) = registry.borrow_mut().entries.get_mut(&self.id)
        {
            entry.bounds = bounds;
        }
    }

    /// Returns whether a press outside the bounds happened since the last call.
    pub fn take_outside_press(&self) -> bool {
        self.registry
            .upgrade()
            .and_then(|registry| {
                registry
                    .borrow_mut()
                    .entries
                    .get_mut(&self.id)
                    .map(|entry| std::mem::take(&mut entry.outside_press))
            })
            .unwrap_or(false)
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_is_released_on_drop() {
        let listeners = PointerListeners::new();
        let first = listeners.subscribe();
        let second = listeners.subscribe();
        assert_eq!(listeners.len(), 2);
        drop(first);
        assert_eq!(listeners.len(), 1);
        drop(second);
        assert!(listeners.is_empty());
    }

    #[test]
    fn press_outside_bounds_is_recorded_once() {
        let listeners = PointerListeners::new();
        let subscription = listeners.subscribe();
        subscription.set_bounds(Rect::new(10, 5, 20, 3));

        listeners.dispatch_press(12, 6);
        assert!(!subscription.take_outside_press());

        listeners.dispatch_press(0, 0);
        assert!(subscription.take_outside_press());
        assert!(!subscription.take_outside_press());
    }

    #[test]
    fn subscription_outliving_registry_is_inert() {
        let listeners = PointerListeners::new();
        let subscription = listeners.subscribe();
        drop(listeners);
        subscription.set_bounds(Rect::new(0, 0, 1, 1));
        assert!(!subscription.take_outside_press());
    }
}
