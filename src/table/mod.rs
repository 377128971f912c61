//! Table view state: column headers and row items.
//!
//! [`TableStore`] is the entry point views use. It layers typed mutations
//! over a [`Store`](crate::Store) of [`TableState`].

mod header;
mod item;
mod state;
mod table_store;

pub use header::Header;
pub use item::Item;
pub use state::TableState;
pub use table_store::TableStore;
