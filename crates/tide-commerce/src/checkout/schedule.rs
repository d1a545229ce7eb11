//! Service options and pre-booking slot validation.

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// Minimum lead time between placing an order and the booked slot.
pub const MIN_LEAD_SECONDS: i64 = 90 * 60;

/// How the delivered fish is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceOption {
    /// Live fish delivered and cleaned at the customer's home.
    #[default]
    OnsiteCut,
    /// Fish filleted and cleaned before dispatch.
    Precut,
}

impl ServiceOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOption::OnsiteCut => "Onsite cut",
            ServiceOption::Precut => "Precut",
        }
    }
}

/// A validated service choice with its pre-booking slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    /// The chosen preparation option.
    pub option: ServiceOption,
    /// Booked slot as a Unix timestamp.
    pub slot: i64,
}

impl ServiceSelection {
    /// Validate a slot choice against the current time.
    ///
    /// Both service options require a slot at least
    /// [`MIN_LEAD_SECONDS`] in the future.
    pub fn new(
        option: ServiceOption,
        slot: Option<i64>,
        now: i64,
    ) -> Result<Self, CheckoutError> {
        let slot = slot.ok_or(CheckoutError::MissingSlot)?;
        if slot < now + MIN_LEAD_SECONDS {
            return Err(CheckoutError::SlotTooSoon {
                minimum_minutes: MIN_LEAD_SECONDS / 60,
            });
        }
        Ok(Self { option, slot })
    }

    /// Describe the selection for the order payload.
    pub fn describe(&self) -> String {
        format!("{} (slot: {})", self.option.as_str(), self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_missing_slot_rejected() {
        let result = ServiceSelection::new(ServiceOption::OnsiteCut, None, NOW);
        assert!(matches!(result, Err(CheckoutError::MissingSlot)));
    }

    #[test]
    fn test_slot_inside_lead_time_rejected() {
        let too_soon = NOW + MIN_LEAD_SECONDS - 1;
        let result = ServiceSelection::new(ServiceOption::Precut, Some(too_soon), NOW);
        assert!(matches!(result, Err(CheckoutError::SlotTooSoon { .. })));
    }

    #[test]
    fn test_slot_at_lead_time_accepted() {
        let slot = NOW + MIN_LEAD_SECONDS;
        let selection =
            ServiceSelection::new(ServiceOption::OnsiteCut, Some(slot), NOW).unwrap();
        assert_eq!(selection.slot, slot);
        assert_eq!(selection.option, ServiceOption::OnsiteCut);
    }

    #[test]
    fn test_describe() {
        let selection =
            ServiceSelection::new(ServiceOption::Precut, Some(NOW + MIN_LEAD_SECONDS), NOW)
                .unwrap();
        assert!(selection.describe().starts_with("Precut"));
    }
}
