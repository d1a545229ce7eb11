//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
///
/// Discounts, shipping, and tax are not computed by this storefront;
/// grand total equals subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Final total.
    pub grand_total: Money,
    /// Per-line-item breakdown.
    pub line_items: Vec<LineItemPricing>,
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product id.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: Quantity,
    /// Line total (`unit_price × quantity`).
    pub line_total: Money,
}
