//! Generic reactive state container.
//!
//! A [`Store`] holds one value, applies mutations atomically and pushes every
//! change to its subscribers synchronously.

mod store;

pub use store::{Store, SubscriptionGuard, SubscriptionId};
