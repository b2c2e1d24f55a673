//! Team-level billing settings
//!
//! Owned by a team, mutated through the settings workflow, strictly
//! read-only to the billing calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How water usage is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterBillingMode {
    /// Consumption × rate, from the water meter
    Metered,
    /// Flat fee per period, water meter ignored
    Fixed,
}

impl Default for WaterBillingMode {
    fn default() -> Self {
        WaterBillingMode::Metered
    }
}

/// Tariff configuration for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSettings {
    /// Water billing policy
    pub water_billing_mode: WaterBillingMode,
    /// Charge per water unit in metered mode
    pub water_rate_per_unit: Decimal,
    /// Flat water charge in fixed mode
    pub water_fixed_fee: Decimal,
    /// Charge per electric unit
    pub electric_rate_per_unit: Decimal,
    /// Tax as a percentage of the subtotal (7 means 7%)
    pub tax_rate: Decimal,
    /// ISO 4217 display currency
    pub currency: String,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            water_billing_mode: WaterBillingMode::default(),
            water_rate_per_unit: Decimal::ZERO,
            water_fixed_fee: Decimal::ZERO,
            electric_rate_per_unit: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            currency: crate::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl BillingSettings {
    /// Metered-water settings with the given rates
    pub fn metered(
        water_rate_per_unit: Decimal,
        electric_rate_per_unit: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            water_billing_mode: WaterBillingMode::Metered,
            water_rate_per_unit,
            electric_rate_per_unit,
            tax_rate,
            ..Self::default()
        }
    }

    /// Fixed-fee water settings with the given fee and rates
    pub fn fixed(
        water_fixed_fee: Decimal,
        electric_rate_per_unit: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            water_billing_mode: WaterBillingMode::Fixed,
            water_fixed_fee,
            electric_rate_per_unit,
            tax_rate,
            ..Self::default()
        }
    }

    /// Set the display currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
