//! Shopping cart module.
//!
//! Contains the line item record, the cart reducer, pricing, and the
//! store-backed cart state manager.

mod cart;
mod item;
mod manager;
mod pricing;

pub use cart::Cart;
pub use item::LineItem;
pub use manager::{cached_count, CartManager};
pub use pricing::{CartPricing, LineItemPricing};
