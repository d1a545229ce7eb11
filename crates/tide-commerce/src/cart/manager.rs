//! The cart state manager: single source of truth for cart contents,
//! mirrored into the durable session store.
//!
//! The manager owns the [`Cart`] exclusively for the session; every other
//! component reads snapshots and routes mutations through the operations
//! here. Each mutation applies to the in-memory collection, recomputes
//! totals, and writes the full serialized collection back to the store
//! before returning. A failed store write surfaces as an error but leaves
//! the in-memory collection consistent.

use crate::cart::{Cart, LineItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::quantity::{Quantity, QuantityPolicy};
use tide_store::{item_count_key, SessionStore, CART_ITEMS_KEY, ITEM_COUNT_PREFIX};
use tracing::{debug, warn};

/// Store-backed cart state manager.
///
/// Constructed once by the composition root and handed to views; generic
/// over the session store so tests and hosts inject their own backend.
pub struct CartManager<S: SessionStore> {
    store: S,
    cart: Cart,
    policy: QuantityPolicy,
}

impl<S: SessionStore> CartManager<S> {
    /// Load the cart from the store, or start empty.
    ///
    /// Missing or malformed store contents yield an empty cart; the parse
    /// failure is logged and swallowed, never surfaced to the caller.
    pub fn load(store: S, policy: QuantityPolicy) -> Self {
        let cart = match store.get::<Vec<LineItem>>(CART_ITEMS_KEY) {
            Ok(Some(items)) => match Cart::from_items(items, Currency::default()) {
                Ok(cart) => cart,
                Err(err) => {
                    warn!(error = %err, "persisted cart is inconsistent, starting empty");
                    Cart::default()
                }
            },
            Ok(None) => Cart::default(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted cart, starting empty");
                Cart::default()
            }
        };

        Self {
            store,
            cart,
            policy,
        }
    }

    /// Add a quantity of an item; same-id adds accumulate.
    pub fn add_item(&mut self, item: LineItem, quantity: Quantity) -> Result<(), CommerceError> {
        let id = item.product_id.clone();
        self.cart.add_item(item.with_quantity(quantity), &self.policy)?;
        self.persist()?;
        self.trace_mutation("add_item", &id);
        Ok(())
    }

    /// Add a quantity of a catalog product.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: Quantity,
    ) -> Result<(), CommerceError> {
        self.add_item(LineItem::from_product(product, quantity), quantity)
    }

    /// Set the absolute quantity for an item, inserting it if absent.
    ///
    /// A non-positive quantity removes the entry entirely.
    pub fn set_item(&mut self, item: LineItem) -> Result<(), CommerceError> {
        let id = item.product_id.clone();
        self.cart.set_item(item, &self.policy)?;
        self.persist()?;
        self.trace_mutation("set_item", &id);
        Ok(())
    }

    /// Set the absolute quantity for an item already in the cart.
    ///
    /// Returns `false` if no item with this id is present.
    pub fn set_item_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<bool, CommerceError> {
        let touched = self.cart.set_quantity(product_id, quantity, &self.policy)?;
        if touched {
            self.persist()?;
            self.trace_mutation("set_item_quantity", product_id);
        }
        Ok(touched)
    }

    /// Step an item's quantity up by the policy step.
    pub fn increment(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let touched = self.cart.increment(product_id, &self.policy)?;
        if touched {
            self.persist()?;
            self.trace_mutation("increment", product_id);
        }
        Ok(touched)
    }

    /// Step an item's quantity down by the policy step; an item at one
    /// unit or below is removed.
    pub fn decrement(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let touched = self.cart.decrement(product_id, &self.policy)?;
        if touched {
            self.persist()?;
            self.trace_mutation("decrement", product_id);
        }
        Ok(touched)
    }

    /// Remove an item unconditionally; no-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let removed = self.cart.remove_item(product_id)?;
        if removed {
            self.persist()?;
            self.trace_mutation("remove_item", product_id);
        }
        Ok(removed)
    }

    /// Empty the cart and clear the durable store.
    ///
    /// The collection key is deleted, not overwritten with an empty
    /// array, and every per-item count key goes with it.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        self.store.delete(CART_ITEMS_KEY)?;
        self.delete_count_keys()?;
        debug!(op = "clear", "cart cleared");
        Ok(())
    }

    /// Immutable snapshot of the collection for read-only consumers.
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Quantity of an item, zero if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> Quantity {
        self.cart.quantity_of(product_id)
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> Quantity {
        self.cart.total_count()
    }

    /// Sum of `unit_price × quantity` over all items.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The quantity policy in force.
    pub fn policy(&self) -> &QuantityPolicy {
        &self.policy
    }

    /// Write the full collection snapshot and refresh the per-item count
    /// cache. Stale count keys for removed items are deleted.
    fn persist(&self) -> Result<(), CommerceError> {
        self.store.set(CART_ITEMS_KEY, self.cart.items())?;

        for key in self.store.keys()? {
            let Some(id) = key.strip_prefix(ITEM_COUNT_PREFIX) else {
                continue;
            };
            if self.cart.get_item(&ProductId::new(id)).is_none() {
                self.store.delete(&key)?;
            }
        }
        for item in self.cart.items() {
            let key = item_count_key(item.product_id.as_str());
            self.store
                .set_raw(&key, item.quantity.to_string().as_bytes())?;
        }
        Ok(())
    }

    fn delete_count_keys(&self) -> Result<(), CommerceError> {
        for key in self.store.keys()? {
            if key.starts_with(ITEM_COUNT_PREFIX) {
                self.store.delete(&key)?;
            }
        }
        Ok(())
    }

    fn trace_mutation(&self, op: &str, product_id: &ProductId) {
        debug!(
            op,
            product_id = %product_id,
            total_count = %self.cart.total_count(),
            total_price = %self.cart.total_price(),
            "cart updated"
        );
    }
}

/// Read the best-effort per-item quantity cache.
///
/// Used to pre-populate UI counters before the full collection loads.
/// Any failure (missing key, stale bytes) reads as zero; the collection
/// snapshot is authoritative on disagreement.
pub fn cached_count<S: SessionStore>(store: &S, product_id: &ProductId) -> Quantity {
    let key = item_count_key(product_id.as_str());
    match store.get_raw(&key) {
        Ok(Some(bytes)) => std::str::from_utf8(&bytes)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .map(Quantity::from_decimal)
            .unwrap_or(Quantity::ZERO),
        _ => Quantity::ZERO,
    }
}
