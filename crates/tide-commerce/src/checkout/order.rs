//! Order assembly.

use crate::cart::Cart;
use crate::checkout::{Address, ServiceSelection};
use crate::error::CheckoutError;
use crate::ids::CustomerId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
    PayOnline,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::PayOnline => "Pay Online",
        }
    }

    /// Whether orders can currently be placed with this method.
    ///
    /// Online payment is not wired up yet; only cash on delivery orders
    /// go through.
    pub fn is_orderable(&self) -> bool {
        matches!(self, PaymentMethod::CashOnDelivery)
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    OrderPlaced,
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::OrderPlaced => "Order Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// The order payload submitted to the order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Customer placing the order.
    pub customer_id: CustomerId,
    /// Delivery address, one line.
    pub address: String,
    /// Products summary ("name x count" joined with ", ").
    pub summary: String,
    /// Service selection description.
    pub service: String,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Total cost.
    pub cost: Money,
    /// Transaction id; empty for cash on delivery.
    pub transaction_id: String,
    /// Order status.
    pub status: OrderStatus,
}

/// Builds an [`Order`] from cart contents and checkout form state.
///
/// Construction validates everything up front; a draft that builds is a
/// draft that can be submitted. The cart is untouched by building a
/// draft — the caller clears it only after the submission endpoint
/// reports success, so a failed submission never loses the cart.
#[derive(Debug, Clone)]
pub struct OrderDraft;

impl OrderDraft {
    /// Assemble an order from a cart and checkout selections.
    pub fn build(
        cart: &Cart,
        customer_id: CustomerId,
        address: &Address,
        service: &ServiceSelection,
        payment: PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if !address.is_complete() {
            return Err(CheckoutError::IncompleteAddress);
        }
        if !payment.is_orderable() {
            return Err(CheckoutError::PaymentUnavailable(
                payment.as_str().to_string(),
            ));
        }

        let pricing = cart.pricing()?;

        Ok(Order {
            customer_id,
            address: address.one_line(),
            summary: products_summary(cart),
            service: service.describe(),
            payment_method: payment,
            cost: pricing.grand_total,
            transaction_id: String::new(),
            status: OrderStatus::OrderPlaced,
        })
    }
}

/// Summarize cart contents as `"name x count"` entries joined with `", "`.
pub fn products_summary(cart: &Cart) -> String {
    cart.items()
        .iter()
        .map(|item| format!("{} x {}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}
