use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;
type SubscriberMap<T> = RwLock<HashMap<usize, Subscriber<T>>>;

/// A shareable container for a piece of application state.
///
/// Stores are the propagation layer between the data owners (the directory,
/// the session) and whatever renders them: every mutation notifies the
/// current subscribers synchronously, so reads after a mutation always see
/// the new state.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<SubscriberMap<T>>,
    next_key: Arc<AtomicUsize>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            next_key: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.state.read().unwrap().clone()
    }

    /// Read state through a function without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state in place using a function.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut state = self.state.write().unwrap();
            f(&mut state);
        }
        self.notify();
    }

    /// Replace the state with a new value.
    pub fn set(&self, new_state: T) {
        *self.state.write().unwrap() = new_state;
        self.notify();
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs on every subsequent mutation. The returned
    /// [`Subscription`] detaches the callback when dropped; call
    /// [`Subscription::forget`] for a subscriber that should live as long
    /// as the store.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let key = self.next_key.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .write()
            .unwrap()
            .insert(key, Arc::new(callback));
        Subscription {
            key,
            subscribers: Arc::downgrade(&self.subscribers),
            detached: false,
        }
    }

    /// Subscribe and immediately invoke the callback with the current state.
    ///
    /// Useful for screens that render once on mount and then track changes.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn watch<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        // Call with a snapshot so the callback may read the store freely.
        let current = self.get();
        callback(&current);
        self.subscribe(callback)
    }

    /// Notify all subscribers of a state change.
    fn notify(&self) {
        // Clone the callbacks out so a subscriber may touch the store
        // without deadlocking on the subscriber map.
        let subscribers: Vec<Subscriber<T>> =
            self.subscribers.read().unwrap().values().cloned().collect();
        let state = self.state.read().unwrap();
        for subscriber in subscribers {
            subscriber(&state);
        }
    }
}

impl<T: Clone> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            next_key: Arc::clone(&self.next_key),
        }
    }
}

/// RAII handle for a store subscription.
///
/// Dropping the handle removes the callback from the store. The handle holds
/// only a weak reference, so it never keeps a dead store alive.
pub struct Subscription<T> {
    key: usize,
    subscribers: Weak<SubscriberMap<T>>,
    detached: bool,
}

impl<T> Subscription<T> {
    /// Keep the callback registered for the lifetime of the store.
    pub fn forget(mut self) {
        self.detached = true;
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(subscribers) = self.subscribers.upgrade() {
            if let Ok(mut subscribers) = subscribers.write() {
                subscribers.remove(&self.key);
            }
        }
    }
}
