use std::sync::Arc;

use super::{Header, Item, TableState};
use crate::error::Result;
use crate::store::{Store, SubscriptionGuard, SubscriptionId};

const TARGET: &str = "tablestore::table";

/// State container for a table view: column `headers` and row `items`.
///
/// A `TableStore` is an explicit context object. Clone it to hand the same
/// store to several views; create another with [`TableStore::new`] for an
/// independent one.
///
/// Every mutation notifies all current subscribers before it returns,
/// including an [`update_item`](TableStore::update_item) that matched
/// nothing.
///
/// # Examples
///
/// ```
/// use tablestore::{Item, TableStore};
///
/// let store = TableStore::new();
/// store.set_items(vec![
///     Item::named("x").with("age", 10),
///     Item::named("y").with("age", 20),
/// ]);
///
/// store.update_item(Item::named("y").with("age", 99));
///
/// assert_eq!(
///     store.items(),
///     vec![
///         Item::named("x").with("age", 10),
///         Item::named("y").with("age", 99),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableStore {
    inner: Store<TableState>,
}

impl TableStore {
    /// An empty store: no headers, no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with existing state.
    pub fn with_state(state: TableState) -> Self {
        Self {
            inner: Store::new(state),
        }
    }

    /// Replace the header list.
    pub fn set_headers(&self, headers: Vec<Header>) {
        let count = headers.len();
        self.inner.update(|state| state.replace_headers(headers));
        tracing::trace!(target: TARGET, headers = count, "headers replaced");
    }

    /// Replace the item list.
    pub fn set_items(&self, items: Vec<Item>) {
        let count = items.len();
        self.inner.update(|state| state.replace_items(items));
        tracing::trace!(target: TARGET, items = count, "items replaced");
    }

    /// Replace the first item whose `name` equals `updated`'s name.
    ///
    /// The new element is `updated` itself; fields of the old element that
    /// `updated` lacks are not kept. When no item carries that name the list
    /// is left as it is and no error is raised.
    pub fn update_item(&self, updated: Item) {
        let name = updated.name().cloned();
        match self.inner.update(|state| state.update_item(updated)) {
            Some(position) => {
                tracing::trace!(target: TARGET, ?name, position, "item updated")
            }
            None => tracing::debug!(target: TARGET, ?name, "no item with this name; update ignored"),
        }
    }

    /// Parse a JSON array of headers and replace the header list.
    ///
    /// On a parse error the store is left untouched and nobody is notified.
    pub fn set_headers_json(&self, json: &str) -> Result<()> {
        let headers: Vec<Header> = serde_json::from_str(json)?;
        self.set_headers(headers);
        Ok(())
    }

    /// Parse a JSON array of objects and replace the item list.
    ///
    /// On a parse error the store is left untouched and nobody is notified.
    pub fn set_items_json(&self, json: &str) -> Result<()> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        self.set_items(items);
        Ok(())
    }

    /// The current header list.
    pub fn headers(&self) -> Vec<Header> {
        self.inner.read(|state| state.headers().to_vec())
    }

    /// The current item list.
    pub fn items(&self) -> Vec<Item> {
        self.inner.read(|state| state.items().to_vec())
    }

    /// Shared read-only view of both collections, without copying them.
    pub fn snapshot(&self) -> Arc<TableState> {
        self.inner.snapshot()
    }

    /// Call `listener` with the new state after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&TableState) + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    /// Like [`subscribe`](TableStore::subscribe), ending when the guard drops.
    pub fn subscribe_scoped<F>(&self, listener: F) -> SubscriptionGuard<TableState>
    where
        F: Fn(&TableState) + Send + Sync + 'static,
    {
        self.inner.subscribe_scoped(listener)
    }

    /// Stop notifying a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}
