//! Commerce error types.

use crate::quantity::Quantity;
use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity (zero or negative).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(Quantity),

    /// Quantity is not a multiple of the configured step.
    #[error("Quantity {quantity} is not a multiple of the allowed step {step}")]
    StepMismatch { quantity: Quantity, step: Quantity },

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {quantity} exceeds maximum allowed ({max})")]
    QuantityExceedsLimit { quantity: Quantity, max: Quantity },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] tide_store::StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while assembling an order at checkout.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Cannot order an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The delivery address is missing required fields.
    #[error("Delivery address is incomplete")]
    IncompleteAddress,

    /// No pre-booking slot was selected.
    #[error("No booking slot selected")]
    MissingSlot,

    /// The selected slot is inside the minimum lead time.
    #[error("Booking slot must be at least {minimum_minutes} minutes from now")]
    SlotTooSoon { minimum_minutes: i64 },

    /// The selected payment method cannot place orders yet.
    #[error("Payment method not available: {0}")]
    PaymentUnavailable(String),

    /// Underlying commerce error (pricing overflow and the like).
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
