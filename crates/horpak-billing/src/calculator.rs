//! Pure invoice arithmetic
//!
//! Converts meter-reading pairs and tariff settings into billable amounts.
//! No I/O, no rounding: identical inputs always produce identical outputs,
//! and display rounding is left to the presentation layer.

use horpak_common::{BillingSettings, InvoiceAmounts, MeterReading, WaterBillingMode};
use rust_decimal::Decimal;
use tracing::debug;

/// Stateless calculator over one team's tariff settings
#[derive(Debug, Clone)]
pub struct BillingCalculator {
    settings: BillingSettings,
}

impl BillingCalculator {
    pub fn new(settings: BillingSettings) -> Self {
        Self { settings }
    }

    /// The tariff settings this calculator bills against
    pub fn settings(&self) -> &BillingSettings {
        &self.settings
    }

    /// Compute the amount breakdown for one billing period.
    ///
    /// In fixed water mode the water charge is the flat fee and any supplied
    /// water reading is ignored; in metered mode the water charge is
    /// consumption × rate. Callers generating invoices should go through
    /// [`generate_invoice`](crate::generate_invoice), which enforces the
    /// required-reading preconditions before reaching this arithmetic.
    pub fn compute(
        &self,
        water: Option<&MeterReading>,
        electric: &MeterReading,
        room_rent: Option<Decimal>,
    ) -> InvoiceAmounts {
        let electric_consumption = electric.consumption();
        let electric_subtotal = electric_consumption * self.settings.electric_rate_per_unit;

        let (water_consumption, water_subtotal) = match self.settings.water_billing_mode {
            WaterBillingMode::Fixed => (None, self.settings.water_fixed_fee),
            WaterBillingMode::Metered => {
                let consumption = water.map(MeterReading::consumption).unwrap_or(Decimal::ZERO);
                (Some(consumption), consumption * self.settings.water_rate_per_unit)
            }
        };

        let subtotal = water_subtotal + electric_subtotal + room_rent.unwrap_or(Decimal::ZERO);
        let tax = subtotal * self.settings.tax_rate / Decimal::ONE_HUNDRED;
        let total = subtotal + tax;

        debug!(%subtotal, %tax, %total, "computed invoice amounts");

        InvoiceAmounts {
            room_rent,
            water_consumption,
            electric_consumption,
            water_subtotal,
            electric_subtotal,
            subtotal,
            tax,
            total,
            currency: self.settings.currency.clone(),
            computed_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
