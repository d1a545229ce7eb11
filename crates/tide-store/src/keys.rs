//! Well-known keys in the session store.
//!
//! The cart manager owns two key shapes: the collection snapshot under a
//! fixed key, and a best-effort per-item quantity cache under
//! `count_<product id>`. The snapshot is authoritative; the per-item keys
//! only pre-populate UI counters before the full collection loads.

/// Key holding the full serialized cart collection.
pub const CART_ITEMS_KEY: &str = "cartItems";

/// Prefix for per-item quantity cache keys.
pub const ITEM_COUNT_PREFIX: &str = "count_";

/// Build the quantity-cache key for a product id.
pub fn item_count_key(product_id: &str) -> String {
    crate::store_key!("count", product_id)
}

/// Helper to build namespaced store keys.
///
/// # Example
///
/// ```rust
/// use tide_store::store_key;
///
/// let key = store_key!("count", "prod-42");
/// assert_eq!(key, "count_prod-42");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push('_');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_key() {
        assert_eq!(item_count_key("abc123"), "count_abc123");
    }

    #[test]
    fn test_store_key_macro() {
        let key = store_key!("count", "prod-1");
        assert_eq!(key, "count_prod-1");

        let nested = store_key!("cart", "sess", 42);
        assert_eq!(nested, "cart_sess_42");
    }
}
