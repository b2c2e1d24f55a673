//! Invoice amount breakdown
//!
//! The derived output of one billing computation. Not persisted here; the
//! storage layer owns invoice records, this is the arithmetic result handed
//! to it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary breakdown for one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceAmounts {
    /// Room rent, when supplied by the caller
    pub room_rent: Option<Decimal>,

    /// Water units consumed; None in fixed-fee mode (no meter semantics)
    pub water_consumption: Option<Decimal>,

    /// Electric units consumed
    pub electric_consumption: Decimal,

    /// Water charge for the period
    pub water_subtotal: Decimal,

    /// Electric charge for the period
    pub electric_subtotal: Decimal,

    /// Water + electric + rent, before tax
    pub subtotal: Decimal,

    /// Tax on the subtotal
    pub tax: Decimal,

    /// Amount due
    pub total: Decimal,

    /// Display currency, copied from the settings
    pub currency: String,

    /// Computation timestamp (Unix millis)
    pub computed_at: i64,
}

impl InvoiceAmounts {
    /// True when every monetary field is non-negative
    pub fn is_non_negative(&self) -> bool {
        self.water_subtotal >= Decimal::ZERO
            && self.electric_subtotal >= Decimal::ZERO
            && self.subtotal >= Decimal::ZERO
            && self.tax >= Decimal::ZERO
            && self.total >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> InvoiceAmounts {
        InvoiceAmounts {
            room_rent: Some(dec!(3500)),
            water_consumption: Some(dec!(4)),
            electric_consumption: dec!(60),
            water_subtotal: dec!(72),
            electric_subtotal: dec!(480),
            subtotal: dec!(4052),
            tax: dec!(283.64),
            total: dec!(4335.64),
            currency: "THB".to_string(),
            computed_at: 0,
        }
    }

    #[test]
    fn test_is_non_negative() {
        assert!(sample().is_non_negative());

        let mut amounts = sample();
        amounts.total = dec!(-1);
        assert!(!amounts.is_non_negative());
    }

    #[test]
    fn test_serde_round_trip() {
        let amounts = sample();
        let json = serde_json::to_string(&amounts).unwrap();
        let back: InvoiceAmounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amounts);
    }
}
