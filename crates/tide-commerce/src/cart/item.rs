//! Cart line item.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

/// One product's presence in the cart.
///
/// Catalog fields are denormalized onto the item so the cart renders
/// without a catalog lookup. A line item with zero quantity never exists
/// in a cart; zero means absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity in the cart.
    pub quantity: Quantity,
    /// Short description.
    pub description: String,
    /// Base64-encoded product image.
    pub image_data: String,
    /// Weight label.
    pub weight: String,
}

impl LineItem {
    /// Build a line item from a catalog product.
    pub fn from_product(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            description: product.description.clone(),
            image_data: product.image_data.clone(),
            weight: product.weight.clone(),
        }
    }

    /// Total price for this line (`unit_price × quantity`).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .multiply_quantity(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Copy of this item with a different quantity.
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}
