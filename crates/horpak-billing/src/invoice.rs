//! Invoice generation from a reading group
//!
//! The workflow gate in front of the calculator: checks that the readings an
//! invoice needs are actually present before any arithmetic runs, and turns
//! missing inputs into typed errors with human-readable reasons.

use horpak_common::{
    BillingError, BillingSettings, InvoiceAmounts, ReadingGroup, Result, WaterBillingMode,
};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::calculator::BillingCalculator;

/// Generate the amount breakdown for one reading group.
///
/// Preconditions, checked in order:
/// - an electric reading must be present;
/// - in metered water mode a water reading must be present
///   (fixed mode bills the flat fee and needs none);
/// - `room_rent`, when given, must be non-negative.
#[instrument(skip(group, settings), fields(room_id = %group.room_id))]
pub fn generate_invoice(
    group: &ReadingGroup,
    settings: &BillingSettings,
    room_rent: Option<Decimal>,
) -> Result<InvoiceAmounts> {
    let electric = group
        .electric
        .as_ref()
        .ok_or(BillingError::ElectricReadingRequired)?;

    let water = match settings.water_billing_mode {
        WaterBillingMode::Fixed => None,
        WaterBillingMode::Metered => Some(
            group
                .water
                .as_ref()
                .ok_or(BillingError::WaterReadingRequired)?,
        ),
    };

    if let Some(rent) = room_rent {
        if rent < Decimal::ZERO {
            return Err(BillingError::NegativeRent(rent).into());
        }
    }

    let calculator = BillingCalculator::new(settings.clone());
    Ok(calculator.compute(water, electric, room_rent))
}
