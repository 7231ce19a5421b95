//! # Observable Slots
//!
//! A [`Slot`] holds at most one value and a list of listeners. Every write
//! replaces the value and calls each listener exactly once; a listener added
//! after a write is called immediately with the current value.
//!
//! Observing returns a [`Subscription`]. Dropping it removes the listener, so a
//! screen releases all of its observations by dropping its subscriptions at
//! teardown.
//!
//! ```rust
//! use detail::core::slot::Slot;
//!
//! let slot = Slot::new();
//! slot.set(1);
//!
//! let (tx, rx) = async_channel::unbounded();
//! let _sub = slot.observe_into(tx, |v: i32| v * 10);
//! assert_eq!(rx.try_recv().ok(), Some(10)); // replayed
//!
//! slot.set(2);
//! assert_eq!(rx.try_recv().ok(), Some(20));
//! ```

use async_channel::Sender;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Listener callback. Returning `false` unregisters it.
type Listener<T> = Box<dyn FnMut(&T) -> bool + Send>;

/// Each listener sits behind its own lock so it can run with the slot unlocked.
type SharedListener<T> = Arc<Mutex<Listener<T>>>;

struct SlotInner<T> {
    value: Option<T>,
    listeners: Vec<(u64, SharedListener<T>)>,
    next_id: u64,
}

/// Single-value observable holder with last-value replay.
///
/// Cloning a `Slot` yields another handle to the same value.
pub struct Slot<T> {
    inner: Arc<Mutex<SlotInner<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Slot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                value: None,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value, if any.
    pub fn get(&self) -> Option<T> {
        self.inner.lock().value.clone()
    }

    /// Replace the value and notify every current listener once.
    ///
    /// Listeners run after the slot is unlocked, so they may read the slot,
    /// observe it or write other slots.
    pub fn set(&self, value: T) {
        let listeners: Vec<(u64, SharedListener<T>)> = {
            let mut inner = self.inner.lock();
            inner.value = Some(value.clone());
            inner
                .listeners
                .iter()
                .map(|(id, l)| (*id, Arc::clone(l)))
                .collect()
        };

        let finished: Vec<u64> = listeners
            .into_iter()
            .filter_map(|(id, listener)| {
                let mut callback = listener.lock();
                let alive = (*callback)(&value);
                (!alive).then_some(id)
            })
            .collect();

        if !finished.is_empty() {
            self.remove(&finished);
        }
    }

    fn remove(&self, ids: &[u64]) {
        self.inner.lock().listeners.retain(|(id, _)| !ids.contains(id));
    }

    /// Remove the value only if `predicate` accepts it.
    pub fn clear_if(&self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        let mut inner = self.inner.lock();
        if inner.value.as_ref().is_some_and(predicate) {
            inner.value.take()
        } else {
            None
        }
    }

    /// Register a listener. It is called right away if a value is present.
    ///
    /// A listener must not write the slot it observes.
    pub fn observe<F>(&self, listener: F) -> Subscription<T>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        let listener: SharedListener<T> = Arc::new(Mutex::new(Box::new(listener)));
        // Held until the replay is done so a concurrent write is delivered after it
        let mut replay = listener.lock();

        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value.clone())
        };

        let alive = current.map_or(true, |value| (*replay)(&value));
        drop(replay);
        if !alive {
            self.remove(&[id]);
        }

        Subscription {
            id,
            slot: Arc::downgrade(&self.inner),
        }
    }

    /// Forward every value into `tx`, mapped through `map`.
    ///
    /// The listener unregisters itself once the receiving side is closed.
    pub fn observe_into<E, M>(&self, tx: Sender<E>, map: M) -> Subscription<T>
    where
        E: Send + 'static,
        M: Fn(T) -> E + Send + 'static,
    {
        self.observe(move |value| tx.try_send(map(value.clone())).is_ok())
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

/// Handle for one registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription immediately stops observation"]
pub struct Subscription<T> {
    id: u64,
    slot: Weak<Mutex<SlotInner<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.slot.upgrade() {
            inner.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_notifies_each_listener_once() {
        let slot = Slot::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let _sub = slot.observe(move |_: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        slot.set(7);
        slot.set(8);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(slot.get(), Some(8));
    }

    #[test]
    fn test_late_observer_gets_last_value() {
        let slot = Slot::new();
        slot.set("first".to_string());
        slot.set("second".to_string());

        let (tx, rx) = async_channel::unbounded();
        let _sub = slot.observe_into(tx, |v| v);

        assert_eq!(rx.try_recv().ok(), Some("second".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_cleared_value_is_not_replayed() {
        let slot = Slot::new();
        slot.set(1);
        assert_eq!(slot.clear_if(|_| true), Some(1));

        let (tx, rx) = async_channel::unbounded();
        let _sub = slot.observe_into(tx, |v: i32| v);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_clear_if_only_matching_value() {
        let slot = Slot::new();
        slot.set(5);

        assert_eq!(slot.clear_if(|v| *v == 4), None);
        assert_eq!(slot.get(), Some(5));
        assert_eq!(slot.clear_if(|v| *v == 5), Some(5));
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let slot: Slot<i32> = Slot::new();
        let sub = slot.observe(|_| true);
        assert_eq!(slot.listener_count(), 1);

        drop(sub);
        assert_eq!(slot.listener_count(), 0);
    }

    #[test]
    fn test_closed_channel_listener_is_pruned() {
        let slot = Slot::new();
        let (tx, rx) = async_channel::unbounded();
        let _sub = slot.observe_into(tx, |v: i32| v);

        drop(rx);
        slot.set(1);

        assert_eq!(slot.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_read_and_observe_its_slot() {
        let slot: Slot<i32> = Slot::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = slot.clone();
        let log = Arc::clone(&seen);
        let _sub = slot.observe(move |v| {
            log.lock().push((*v, reader.get()));
            let _nested = reader.observe(|_| true);
            true
        });

        slot.set(3);

        assert_eq!(*seen.lock(), vec![(3, Some(3))]);
        assert_eq!(slot.listener_count(), 1);
    }

    #[test]
    fn test_listener_returning_false_is_removed_after_replay() {
        let slot = Slot::new();
        slot.set(1);

        let _sub = slot.observe(|_: &i32| false);
        assert_eq!(slot.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_slot_is_harmless() {
        let slot: Slot<i32> = Slot::new();
        let sub = slot.observe(|_| true);
        drop(slot);
        drop(sub);
    }
}
