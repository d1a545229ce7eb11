//! Fixed-point quantity type and the injectable quantity policy.
//!
//! Cart quantities step by half units in some views (half a fish is a
//! valid order) and whole units in others. Like [`Money`](crate::money),
//! quantities are integers in a small fixed unit — milliunits, 1000 to
//! one — so half steps are exact and totals never accumulate float error.
//! On the wire (the durable store and the order payload) a quantity reads
//! as a plain decimal number, which is what the surrounding views expect.

use crate::error::CommerceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Milliunits per whole unit.
const MILLI: i64 = 1000;

/// A cart quantity in fixed-point milliunits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Quantity(i64);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Quantity = Quantity(0);
    /// One whole unit.
    pub const ONE: Quantity = Quantity(MILLI);
    /// Half a unit.
    pub const HALF: Quantity = Quantity(MILLI / 2);

    /// Create a quantity from raw milliunits.
    pub fn from_milliunits(milli: i64) -> Self {
        Self(milli)
    }

    /// Create a quantity of whole units.
    pub fn whole(units: i64) -> Self {
        Self(units.saturating_mul(MILLI))
    }

    /// Create a quantity from a decimal value, rounding to the nearest
    /// milliunit.
    pub fn from_decimal(value: f64) -> Self {
        Self((value * MILLI as f64).round() as i64)
    }

    /// Raw milliunits.
    pub fn milliunits(&self) -> i64 {
        self.0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / MILLI as f64
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checked addition.
    pub fn checked_add(&self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }

    /// Check whether this quantity is a whole multiple of `step`.
    pub fn is_multiple_of(&self, step: Quantity) -> bool {
        step.0 > 0 && self.0 % step.0 == 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 formatting drops trailing zeros: 1.5 -> "1.5", 2.0 -> "2".
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::from_decimal(value))
    }
}

/// Injectable quantity rules: step granularity and per-item ceiling.
///
/// The listing view steps carts by whole units, the cart view by half
/// units; which applies is a product decision, so the policy is handed to
/// the cart manager by the composition root rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPolicy {
    /// Increment granularity; quantities must be whole multiples of this.
    pub step: Quantity,
    /// Maximum quantity per line item.
    pub max: Quantity,
}

/// Default per-item ceiling, in whole units.
pub const MAX_UNITS_PER_ITEM: i64 = 9999;

impl QuantityPolicy {
    /// Policy stepping by half units.
    pub fn half_unit() -> Self {
        Self {
            step: Quantity::HALF,
            max: Quantity::whole(MAX_UNITS_PER_ITEM),
        }
    }

    /// Policy stepping by whole units.
    pub fn whole_unit() -> Self {
        Self {
            step: Quantity::ONE,
            max: Quantity::whole(MAX_UNITS_PER_ITEM),
        }
    }

    /// Validate a quantity against this policy.
    ///
    /// The quantity must be strictly positive, a whole multiple of the
    /// step, and at most the per-item ceiling.
    pub fn validate(&self, quantity: Quantity) -> Result<(), CommerceError> {
        if !quantity.is_positive() {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !quantity.is_multiple_of(self.step) {
            return Err(CommerceError::StepMismatch {
                quantity,
                step: self.step,
            });
        }
        if quantity > self.max {
            return Err(CommerceError::QuantityExceedsLimit {
                quantity,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for QuantityPolicy {
    fn default() -> Self {
        Self::half_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_half() {
        assert_eq!(Quantity::whole(2).milliunits(), 2000);
        assert_eq!(Quantity::HALF.milliunits(), 500);
        assert_eq!(Quantity::whole(1).checked_add(Quantity::HALF).unwrap(), Quantity::from_milliunits(1500));
    }

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Quantity::from_decimal(1.5).milliunits(), 1500);
        assert_eq!(Quantity::from_decimal(0.5).milliunits(), 500);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_milliunits(1500).to_string(), "1.5");
        assert_eq!(Quantity::whole(2).to_string(), "2");
    }

    #[test]
    fn test_serde_as_decimal_number() {
        let q = Quantity::from_milliunits(1500);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "1.5");

        let back: Quantity = serde_json::from_str("1.5").unwrap();
        assert_eq!(back, q);

        // Integers on the wire deserialize too
        let whole: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(whole, Quantity::whole(2));
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(Quantity::from_milliunits(1500).is_multiple_of(Quantity::HALF));
        assert!(!Quantity::from_milliunits(1500).is_multiple_of(Quantity::ONE));
        assert!(Quantity::whole(3).is_multiple_of(Quantity::ONE));
    }

    #[test]
    fn test_policy_rejects_non_positive() {
        let policy = QuantityPolicy::half_unit();
        assert!(policy.validate(Quantity::ZERO).is_err());
        assert!(policy.validate(Quantity::from_milliunits(-500)).is_err());
    }

    #[test]
    fn test_policy_step_mismatch() {
        let whole = QuantityPolicy::whole_unit();
        assert!(whole.validate(Quantity::HALF).is_err());
        assert!(whole.validate(Quantity::whole(2)).is_ok());

        let half = QuantityPolicy::half_unit();
        assert!(half.validate(Quantity::HALF).is_ok());
        // Whole units are multiples of the half-unit step
        assert!(half.validate(Quantity::whole(2)).is_ok());
    }

    #[test]
    fn test_policy_ceiling() {
        let policy = QuantityPolicy::half_unit();
        assert!(policy.validate(Quantity::whole(MAX_UNITS_PER_ITEM)).is_ok());
        assert!(policy
            .validate(Quantity::whole(MAX_UNITS_PER_ITEM + 1))
            .is_err());
    }
}
