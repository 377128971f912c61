use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Weak};

new_key_type! {
    /// Identifies a listener registered with [`Store::subscribe`].
    ///
    /// Pass it to [`Store::unsubscribe`] to stop receiving notifications.
    pub struct SubscriptionId;
}

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;
type Subscribers<T> = RwLock<SlotMap<SubscriptionId, Subscriber<T>>>;

const TARGET: &str = "tablestore::store";

/// A thread-safe store for managing application state.
///
/// The state lives behind a shared handle: cloning a `Store` gives another
/// handle to the same state and the same subscribers, while two separate
/// calls to [`Store::new`] produce fully independent stores.
///
/// Every mutation ([`set`](Store::set) or [`update`](Store::update)) is
/// applied under a write lock and then notifies all current subscribers
/// synchronously, before the mutating call returns. Listeners receive a
/// snapshot of the state as it was right after the mutation. No lock is held
/// while they run, so a listener may freely read, subscribe, unsubscribe or
/// mutate the store again.
///
/// # Examples
///
/// ```
/// use tablestore::Store;
/// use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
///
/// let store = Store::new(0u32);
/// let seen = Arc::new(AtomicUsize::new(0));
///
/// let id = store.subscribe({
///     let seen = seen.clone();
///     move |n| seen.store(*n as usize, Ordering::SeqCst)
/// });
///
/// store.update(|n| *n += 5);
/// assert_eq!(seen.load(Ordering::SeqCst), 5);
///
/// assert!(store.unsubscribe(id));
/// store.set(9);
/// assert_eq!(seen.load(Ordering::SeqCst), 5);
/// ```
pub struct Store<T> {
    state: Arc<RwLock<Arc<T>>>,
    subscribers: Arc<Subscribers<T>>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            subscribers: Arc::new(RwLock::new(SlotMap::with_key())),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        (**self.state.read()).clone()
    }

    /// Get a shared, immutable snapshot of the current state.
    ///
    /// Cheaper than [`get`](Store::get): the snapshot shares storage with the
    /// store until the next mutation copies it on write.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&*self.state.read())
    }

    /// Read state through a closure without cloning it.
    ///
    /// # Deadlocks
    ///
    /// The state lock is held while `f` runs. Calling [`set`](Store::set) or
    /// [`update`](Store::update) on the same store from inside `f` deadlocks;
    /// use [`snapshot`](Store::snapshot) when the reader needs to mutate.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read();
        f(&**state)
    }

    /// Update the state in place and notify subscribers.
    ///
    /// Whatever the closure returns is handed back to the caller once every
    /// subscriber has run.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = f(Arc::make_mut(&mut *state));
            (result, Arc::clone(&*state))
        };
        self.notify(&snapshot);
        result
    }

    /// Replace the state and notify subscribers.
    pub fn set(&self, new_state: T) {
        let snapshot = Arc::new(new_state);
        *self.state.write() = Arc::clone(&snapshot);
        self.notify(&snapshot);
    }
}

impl<T> Store<T> {
    /// Subscribe to state changes.
    ///
    /// The callback is called after every mutation with the new state.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribers.write().insert(Arc::new(callback));
        tracing::trace!(target: TARGET, ?id, "subscribed");
        id
    }

    /// Subscribe to state changes for as long as the returned guard lives.
    pub fn subscribe_scoped<F>(&self, callback: F) -> SubscriptionGuard<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribe(callback);
        SubscriptionGuard {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(id).is_some();
        tracing::trace!(target: TARGET, ?id, removed, "unsubscribed");
        removed
    }

    /// Number of listeners currently registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Notify all subscribers of a state change.
    fn notify(&self, state: &T) {
        // Listeners may (un)subscribe while running; call a copy of the list.
        let subscribers: Vec<Subscriber<T>> = self.subscribers.read().values().cloned().collect();
        tracing::trace!(target: TARGET, subscribers = subscribers.len(), "notifying");
        for subscriber in &subscribers {
            subscriber(state);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &**self.state.read())
            .field("subscribers", &self.subscribers.read().len())
            .finish()
    }
}

/// RAII guard for a store subscription.
///
/// Dropping the guard unsubscribes the listener. The guard does not keep the
/// store alive.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct SubscriptionGuard<T> {
    id: SubscriptionId,
    subscribers: Weak<Subscribers<T>>,
}

impl<T> SubscriptionGuard<T> {
    /// The id of the guarded subscription.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl<T> Drop for SubscriptionGuard<T> {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            let removed = subscribers.write().remove(self.id).is_some();
            tracing::trace!(target: TARGET, id = ?self.id, removed, "unsubscribed");
        }
    }
}
