//! # tablestore
//!
//! A reactive state container for table views.
//!
//! ## Store (generic)
//!
//! - `Store<T>` - Thread-safe state container shared by handle
//! - Mutations are atomic and notify subscribers synchronously
//! - `subscribe` / `unsubscribe`, or a scoped `SubscriptionGuard`
//!
//! ## Table state
//!
//! - `TableStore` - Holds column `headers` and row `items` for views
//! - `set_headers` / `set_items` replace a whole collection
//! - `update_item` replaces the first row with the same `name`, or does
//!   nothing when there is none
//!
//! The library logs through `tracing` and never installs a subscriber itself.

pub mod error;
pub mod store;
pub mod table;

// Re-export main types for convenience
pub use error::{Result, StoreError};
pub use store::{Store, SubscriptionGuard, SubscriptionId};
pub use table::{Header, Item, TableState, TableStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = TableStore::new();
        assert!(store.items().is_empty());
        store.set_items(vec![Item::named("a")]);
        assert_eq!(store.items().len(), 1);
    }
}
