//! Session-scoped Key-Value store for the TideCart storefront.
//!
//! Provides the durable store the cart state manager mirrors itself into:
//! a session-lifetime key/value surface with automatic JSON serialization.
//! The backend is a trait so the composition root decides where the bytes
//! live; [`MemoryStore`] is the reference implementation.
//!
//! # Example
//!
//! ```rust
//! use tide_store::{MemoryStore, SessionStore};
//!
//! let store = MemoryStore::new();
//! store.set("cartItems", &vec!["catla", "rohu"]).unwrap();
//!
//! let items: Option<Vec<String>> = store.get("cartItems").unwrap();
//! assert_eq!(items.unwrap().len(), 2);
//! ```

mod error;
mod keys;
mod memory;
mod store;

pub use error::StoreError;
pub use keys::{item_count_key, CART_ITEMS_KEY, ITEM_COUNT_PREFIX};
pub use memory::MemoryStore;
pub use store::SessionStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{item_count_key, MemoryStore, SessionStore, StoreError, CART_ITEMS_KEY};
}
