//! The cart collection and its reducer operations.

use crate::cart::{CartPricing, LineItem, LineItemPricing};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::quantity::{Quantity, QuantityPolicy};

/// An ordered collection of line items with derived totals.
///
/// Invariants: product ids are unique; no item has zero or negative
/// quantity; `total_count` and `total_price` are recomputed inside every
/// mutation, never lazily, so readers can never observe stale totals.
///
/// The cart is a pure reducer: it performs no I/O. Persistence is the
/// [`CartManager`](crate::cart::CartManager)'s job.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    total_count: Quantity,
    total_price: Money,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total_count: Quantity::ZERO,
            total_price: Money::zero(currency),
            currency,
        }
    }

    /// Rebuild a cart from persisted items.
    ///
    /// Zero-quantity entries are dropped (zero means absent), then totals
    /// are recomputed.
    pub fn from_items(
        mut items: Vec<LineItem>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        items.retain(|i| i.quantity.is_positive());
        let mut cart = Self {
            items,
            total_count: Quantity::ZERO,
            total_price: Money::zero(currency),
            currency,
        };
        cart.recompute_totals()?;
        Ok(cart)
    }

    /// Add an item to the cart.
    ///
    /// The item's quantity field is the increment: if an item with the
    /// same product id exists its quantity grows by that amount,
    /// otherwise the item is appended. The increment and the merged
    /// quantity must both satisfy the policy.
    pub fn add_item(
        &mut self,
        item: LineItem,
        policy: &QuantityPolicy,
    ) -> Result<(), CommerceError> {
        policy.validate(item.quantity)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            let merged = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            if merged > policy.max {
                return Err(CommerceError::QuantityExceedsLimit {
                    quantity: merged,
                    max: policy.max,
                });
            }
            existing.quantity = merged;
        } else {
            self.items.push(item);
        }

        self.recompute_totals()
    }

    /// Set the absolute quantity for an item, inserting it if absent.
    ///
    /// A non-positive quantity removes the entry entirely; the cart never
    /// keeps an item at zero.
    pub fn set_item(
        &mut self,
        item: LineItem,
        policy: &QuantityPolicy,
    ) -> Result<(), CommerceError> {
        if !item.quantity.is_positive() {
            self.remove_item(&item.product_id)?;
            return Ok(());
        }
        policy.validate(item.quantity)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            *existing = item;
        } else {
            self.items.push(item);
        }

        self.recompute_totals()
    }

    /// Set the absolute quantity for an item already in the cart.
    ///
    /// A non-positive quantity removes the entry. Returns `false` if no
    /// item with this id is present (inserting needs the full payload,
    /// see [`set_item`](Cart::set_item)).
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: Quantity,
        policy: &QuantityPolicy,
    ) -> Result<bool, CommerceError> {
        if !quantity.is_positive() {
            return self.remove_item(product_id);
        }
        policy.validate(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            self.recompute_totals()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Step an item's quantity up by the policy step.
    ///
    /// Returns `false` if the item is absent.
    pub fn increment(
        &mut self,
        product_id: &ProductId,
        policy: &QuantityPolicy,
    ) -> Result<bool, CommerceError> {
        let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) else {
            return Ok(false);
        };
        let stepped = item
            .quantity
            .checked_add(policy.step)
            .ok_or(CommerceError::Overflow)?;
        if stepped > policy.max {
            return Err(CommerceError::QuantityExceedsLimit {
                quantity: stepped,
                max: policy.max,
            });
        }
        item.quantity = stepped;
        self.recompute_totals()?;
        Ok(true)
    }

    /// Step an item's quantity down by the policy step.
    ///
    /// At one unit or below the item is removed outright rather than
    /// stepped into a fraction, matching the cart view's behavior.
    /// Returns `false` if the item is absent.
    pub fn decrement(
        &mut self,
        product_id: &ProductId,
        policy: &QuantityPolicy,
    ) -> Result<bool, CommerceError> {
        let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) else {
            return Ok(false);
        };
        let stepped = item
            .quantity
            .checked_sub(policy.step)
            .ok_or(CommerceError::Overflow)?;
        if item.quantity <= Quantity::ONE || !stepped.is_positive() {
            return self.remove_item(product_id);
        }
        item.quantity = stepped;
        self.recompute_totals()?;
        Ok(true)
    }

    /// Remove an item unconditionally.
    ///
    /// Removing an absent id is a no-op and returns `false`.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.recompute_totals()?;
        }
        Ok(removed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_count = Quantity::ZERO;
        self.total_price = Money::zero(self.currency);
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Quantity of an item, zero if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> Quantity {
        self.get_item(product_id)
            .map(|i| i.quantity)
            .unwrap_or(Quantity::ZERO)
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> Quantity {
        self.total_count
    }

    /// Sum of `unit_price × quantity` over all items.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Per-line pricing breakdown.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let mut line_items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            line_items.push(LineItemPricing {
                product_id: item.product_id.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total()?,
            });
        }

        let subtotal = Money::try_sum(line_items.iter().map(|l| &l.line_total), self.currency)
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: "mixed".to_string(),
            })?;

        Ok(CartPricing {
            subtotal,
            grand_total: subtotal,
            line_items,
        })
    }

    fn recompute_totals(&mut self) -> Result<(), CommerceError> {
        let mut count = Quantity::ZERO;
        let mut price = Money::zero(self.currency);
        for item in &self.items {
            count = count
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            price = price
                .try_add(&item.line_total()?)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                })?;
        }
        self.total_count = count;
        self.total_price = price;
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price_cents: i64, quantity: Quantity) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: id.to_uppercase(),
            unit_price: Money::new(price_cents, Currency::INR),
            quantity,
            description: String::new(),
            image_data: String::new(),
            weight: "500".to_string(),
        }
    }

    fn half() -> QuantityPolicy {
        QuantityPolicy::half_unit()
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::whole(2)), &half())
            .unwrap();

        assert_eq!(cart.total_count(), Quantity::whole(2));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_price().amount_cents, 2000);
    }

    #[test]
    fn test_add_same_item_accumulates() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();
        cart.add_item(item("catla", 1000, Quantity::HALF), &half())
            .unwrap();
        cart.add_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(
            cart.quantity_of(&ProductId::new("catla")),
            Quantity::from_milliunits(2500)
        );
    }

    #[test]
    fn test_half_step_scenario() {
        // add A(price 10, qty 1), then A(qty 0.5): count 1.5, total 15.0
        let mut cart = Cart::default();
        cart.add_item(item("a", 1000, Quantity::ONE), &half()).unwrap();
        cart.add_item(item("a", 1000, Quantity::HALF), &half()).unwrap();

        assert_eq!(cart.total_count(), Quantity::from_milliunits(1500));
        assert_eq!(cart.total_price(), Money::new(1500, Currency::INR));
    }

    #[test]
    fn test_add_rejects_non_positive() {
        let mut cart = Cart::default();
        assert!(cart
            .add_item(item("catla", 1000, Quantity::ZERO), &half())
            .is_err());
        assert!(cart
            .add_item(item("catla", 1000, Quantity::from_milliunits(-500)), &half())
            .is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_off_step() {
        let mut cart = Cart::default();
        let whole = QuantityPolicy::whole_unit();
        assert!(cart
            .add_item(item("catla", 1000, Quantity::HALF), &whole)
            .is_err());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::whole(2)), &half())
            .unwrap();

        cart.set_quantity(&ProductId::new("catla"), Quantity::ZERO, &half())
            .unwrap();
        assert!(cart.get_item(&ProductId::new("catla")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id() {
        let mut cart = Cart::default();
        let touched = cart
            .set_quantity(&ProductId::new("ghost"), Quantity::ONE, &half())
            .unwrap();
        assert!(!touched);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_item_inserts_when_absent() {
        let mut cart = Cart::default();
        cart.set_item(item("catla", 1000, Quantity::whole(3)), &half())
            .unwrap();
        assert_eq!(cart.quantity_of(&ProductId::new("catla")), Quantity::whole(3));

        // Absolute set, not an increment
        cart.set_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();
        assert_eq!(cart.quantity_of(&ProductId::new("catla")), Quantity::ONE);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();

        let before = cart.clone();
        let removed = cart.remove_item(&ProductId::new("ghost")).unwrap();
        assert!(!removed);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(item("a", 1000, Quantity::whole(2)), &half())
            .unwrap();
        cart.add_item(item("b", 800, Quantity::ONE), &half()).unwrap();
        assert_eq!(cart.total_price().amount_cents, 2800);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), Quantity::ZERO);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();

        cart.increment(&ProductId::new("catla"), &half()).unwrap();
        assert_eq!(
            cart.quantity_of(&ProductId::new("catla")),
            Quantity::from_milliunits(1500)
        );

        cart.decrement(&ProductId::new("catla"), &half()).unwrap();
        assert_eq!(cart.quantity_of(&ProductId::new("catla")), Quantity::ONE);
    }

    #[test]
    fn test_decrement_at_one_removes() {
        let mut cart = Cart::default();
        cart.add_item(item("catla", 1000, Quantity::ONE), &half())
            .unwrap();

        let touched = cart.decrement(&ProductId::new("catla"), &half()).unwrap();
        assert!(touched);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_step_absent_id() {
        let mut cart = Cart::default();
        assert!(!cart.increment(&ProductId::new("ghost"), &half()).unwrap());
        assert!(!cart.decrement(&ProductId::new("ghost"), &half()).unwrap());
    }

    #[test]
    fn test_totals_match_independent_recompute() {
        let mut cart = Cart::default();
        cart.add_item(item("a", 1000, Quantity::whole(2)), &half())
            .unwrap();
        cart.add_item(item("b", 800, Quantity::from_milliunits(1500)), &half())
            .unwrap();
        cart.add_item(item("c", 333, Quantity::HALF), &half()).unwrap();

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.line_total().unwrap().amount_cents)
            .sum();
        assert_eq!(cart.total_price().amount_cents, expected);

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.grand_total.amount_cents, expected);
        assert_eq!(pricing.line_items.len(), 3);
    }

    #[test]
    fn test_from_items_drops_zero_quantities() {
        let items = vec![
            item("a", 1000, Quantity::ONE),
            item("b", 800, Quantity::ZERO),
        ];
        let cart = Cart::from_items(items, Currency::INR).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_count(), Quantity::ONE);
    }

    #[test]
    fn test_insertion_order_stable() {
        let mut cart = Cart::default();
        cart.add_item(item("a", 1000, Quantity::ONE), &half()).unwrap();
        cart.add_item(item("b", 800, Quantity::ONE), &half()).unwrap();
        cart.add_item(item("a", 1000, Quantity::ONE), &half()).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
