//! Delivery address.

use serde::{Deserialize, Serialize};

/// A delivery address, shaped like the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// House number and street.
    pub street: String,
    /// Area and town.
    pub area: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub pincode: String,
    /// Optional landmark.
    pub landmark: Option<String>,
}

impl Address {
    /// Create an address without a landmark.
    pub fn new(
        street: impl Into<String>,
        area: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            area: area.into(),
            city: city.into(),
            pincode: pincode.into(),
            landmark: None,
        }
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty()
            && !self.area.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.pincode.trim().is_empty()
    }

    /// Format as a single line for the order payload.
    pub fn one_line(&self) -> String {
        let mut parts = vec![
            self.street.trim(),
            self.area.trim(),
            self.city.trim(),
            self.pincode.trim(),
        ];
        if let Some(ref landmark) = self.landmark {
            if !landmark.trim().is_empty() {
                parts.push(landmark.trim());
            }
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}
