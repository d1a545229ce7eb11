//! Listing filters: name search and the availability policy.

use crate::catalog::Product;
use std::collections::HashSet;

/// Filter products by a case-insensitive name prefix.
///
/// An empty term matches everything, mirroring the listing view's search
/// box behavior.
pub fn filter_by_name<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    if term.is_empty() {
        return products.iter().collect();
    }
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().starts_with(&term))
        .collect()
}

/// Injectable out-of-stock predicate.
///
/// Whether out-of-stock products are hidden, and how stock is decided, is
/// a product-policy decision; the composition root picks the variant.
#[derive(Debug, Clone, Default)]
pub enum Availability {
    /// Every catalog product is sellable.
    #[default]
    AllowAll,
    /// Only products whose name is on the list are sellable.
    Allowlist(HashSet<String>),
}

impl Availability {
    /// Build a name allowlist (case-insensitive).
    pub fn allowlist<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Allowlist(
            names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Check whether a product is sellable under this policy.
    pub fn is_available(&self, product: &Product) -> bool {
        match self {
            Availability::AllowAll => true,
            Availability::Allowlist(names) => names.contains(&product.name.to_lowercase()),
        }
    }
}

/// Filter a product list down to sellable products.
pub fn available<'a>(products: &'a [Product], policy: &Availability) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| policy.is_available(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn products() -> Vec<Product> {
        parse_catalog(
            r#"[
                {"_id": "p1", "name": "Catla", "price": 10.0},
                {"_id": "p2", "name": "Murrel", "price": 8.0},
                {"_id": "p3", "name": "Prawns", "price": 15.0}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_filter_by_name_prefix() {
        let products = products();
        let hits = filter_by_name(&products, "ca");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Catla");

        // Case-insensitive
        let hits = filter_by_name(&products, "PRAW");
        assert_eq!(hits.len(), 1);

        // Prefix, not substring
        let hits = filter_by_name(&products, "awns");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_filter_empty_term_matches_all() {
        let products = products();
        assert_eq!(filter_by_name(&products, "").len(), 3);
    }

    #[test]
    fn test_availability_allow_all() {
        let products = products();
        let policy = Availability::AllowAll;
        assert_eq!(available(&products, &policy).len(), 3);
    }

    #[test]
    fn test_availability_allowlist() {
        let products = products();
        let policy = Availability::allowlist(["catla", "PRAWNS"]);

        let sellable = available(&products, &policy);
        let names: Vec<&str> = sellable.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Catla", "Prawns"]);
    }
}
