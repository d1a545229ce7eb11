//! Checkout module.
//!
//! Contains the delivery address, service scheduling, and order assembly.
//! The order-submission network call itself is the caller's concern; this
//! module only builds a valid order payload and defines the
//! clear-on-success contract.

mod address;
mod order;
mod schedule;

pub use address::Address;
pub use order::{products_summary, Order, OrderDraft, OrderStatus, PaymentMethod};
pub use schedule::{ServiceOption, ServiceSelection, MIN_LEAD_SECONDS};
