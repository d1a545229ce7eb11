//! Commerce domain types and cart state management for the TideCart
//! live-seafood storefront.
//!
//! This crate provides the storefront's core state:
//!
//! - **Catalog**: closed product schema, API boundary validation, listing
//!   filters, availability policy
//! - **Cart**: line items, the cart reducer, pricing, and the
//!   store-backed [`CartManager`](cart::CartManager)
//! - **Checkout**: delivery address, service scheduling, order assembly
//!
//! # Example
//!
//! ```rust
//! use tide_commerce::prelude::*;
//! use tide_store::MemoryStore;
//!
//! let products = parse_catalog(
//!     r#"[{"_id": "p1", "name": "Catla", "price": 10.0, "weight": "500"}]"#,
//! )
//! .unwrap();
//!
//! let store = MemoryStore::new();
//! let mut cart = CartManager::load(&store, QuantityPolicy::half_unit());
//! cart.add_product(&products[0], Quantity::ONE).unwrap();
//! cart.add_product(&products[0], Quantity::HALF).unwrap();
//!
//! assert_eq!(cart.total_price().display(), "\u{20b9}15.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod quantity;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::{CheckoutError, CommerceError};
pub use ids::*;
pub use money::{Currency, Money};
pub use quantity::{Quantity, QuantityPolicy};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CheckoutError, CommerceError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::quantity::{Quantity, QuantityPolicy};

    // Catalog
    pub use crate::catalog::{available, filter_by_name, parse_catalog, Availability, Product};

    // Cart
    pub use crate::cart::{cached_count, Cart, CartManager, CartPricing, LineItem};

    // Checkout
    pub use crate::checkout::{
        products_summary, Address, Order, OrderDraft, OrderStatus, PaymentMethod, ServiceOption,
        ServiceSelection,
    };
}
