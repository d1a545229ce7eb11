//! Product record schema and catalog boundary validation.
//!
//! The catalog API returns loosely-shaped JSON records. Rather than trust
//! whatever fields happen to be present, the payload is deserialized into
//! [`CatalogRecord`] (which mirrors the API field names) and converted
//! into the closed [`Product`] schema, with invalid records dropped at
//! the boundary.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A product in the catalog.
///
/// Closed schema: every field the views consume is declared here, with
/// the ones the API may omit explicitly optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Base64-encoded product image.
    pub image_data: String,
    /// Weight label (e.g., "500"); display text, not necessarily numeric.
    pub weight: String,
    /// Piece count label (e.g., "10 pieces").
    pub pieces: Option<String>,
    /// Servings label (e.g., "5").
    pub servings: Option<String>,
    /// Short description.
    pub description: String,
    /// Nutritional macros label.
    pub macros: Option<String>,
    /// Suggested recipe text.
    pub recipe: Option<String>,
}

impl Product {
    /// Validate the record: non-empty id and name, non-negative price.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().is_empty() {
            return Err(CommerceError::Validation("product id is empty".into()));
        }
        if self.name.is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price.is_negative() {
            return Err(CommerceError::Validation(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        Ok(())
    }
}

/// A raw catalog record as the API serves it.
///
/// Field names follow the wire format (`_id`, `image`); prices arrive as
/// decimal rupee amounts.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub pieces: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub macros: Option<String>,
    #[serde(default)]
    pub recipe: Option<String>,
}

impl TryFrom<CatalogRecord> for Product {
    type Error = CommerceError;

    fn try_from(raw: CatalogRecord) -> Result<Self, Self::Error> {
        let product = Product {
            id: ProductId::new(raw.id),
            name: raw.name,
            price: Money::from_decimal(raw.price, Currency::INR),
            image_data: raw.image,
            weight: raw.weight,
            pieces: raw.pieces,
            servings: raw.servings,
            description: raw.description,
            macros: raw.macros,
            recipe: raw.recipe,
        };
        product.validate()?;
        Ok(product)
    }
}

/// Parse a catalog API payload into validated products.
///
/// The payload must be a JSON array. Records that fail to deserialize or
/// validate are dropped with a warning; a malformed record never takes
/// the whole catalog down.
pub fn parse_catalog(payload: &str) -> Result<Vec<Product>, CommerceError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(payload)?;
    let mut products = Vec::with_capacity(records.len());

    for record in records {
        let raw: CatalogRecord = match serde_json::from_value(record) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "dropping undecodable catalog record");
                continue;
            }
        };
        match Product::try_from(raw) {
            Ok(product) => products.push(product),
            Err(err) => {
                warn!(error = %err, "dropping invalid catalog record");
            }
        }
    }

    Ok(products)
}
