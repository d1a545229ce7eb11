//! Product catalog module.
//!
//! Contains the closed product record schema, boundary validation for the
//! catalog API payload, and listing filters.

mod filter;
mod product;

pub use filter::{available, filter_by_name, Availability};
pub use product::{parse_catalog, CatalogRecord, Product};
