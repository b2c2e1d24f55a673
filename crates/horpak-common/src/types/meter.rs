//! Meter reading types
//!
//! A reading is one measurement event for a single meter; a reading group
//! pairs the water and electric readings for one room on one date and is the
//! unit invoices are generated from.

use crate::error::BillingError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which utility a meter measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeterType {
    Water,
    Electric,
}

/// One meter's measurement event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    /// Utility measured by this meter
    pub meter_type: MeterType,
    /// Reading at the start of the billing period
    pub previous: Decimal,
    /// Reading at the end of the billing period
    pub current: Decimal,
    /// When the current reading was taken
    pub recorded_at: DateTime<Utc>,
}

impl MeterReading {
    /// Create a new reading recorded now
    pub fn new(meter_type: MeterType, previous: Decimal, current: Decimal) -> Self {
        Self {
            meter_type,
            previous,
            current,
            recorded_at: Utc::now(),
        }
    }

    /// Set the recording timestamp
    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Units consumed over the period, clamped at zero.
    ///
    /// `current >= previous` is enforced by [`validate`](Self::validate)
    /// before a reading enters billing; the clamp keeps consumption
    /// non-negative for readings that bypass that gate.
    pub fn consumption(&self) -> Decimal {
        (self.current - self.previous).max(Decimal::ZERO)
    }

    /// Upstream validation gate for a reading entering billing
    pub fn validate(&self) -> std::result::Result<(), BillingError> {
        if self.previous < Decimal::ZERO {
            return Err(BillingError::NegativeReading(self.previous));
        }
        if self.current < Decimal::ZERO {
            return Err(BillingError::NegativeReading(self.current));
        }
        if self.current < self.previous {
            return Err(BillingError::ReadingOutOfOrder {
                previous: self.previous,
                current: self.current,
            });
        }
        Ok(())
    }
}

/// Paired water + electric readings for one room on one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingGroup {
    /// Unique group ID
    pub id: Uuid,
    /// Room the readings belong to
    pub room_id: String,
    /// Water reading, absent when water is billed as a fixed fee
    pub water: Option<MeterReading>,
    /// Electric reading, always required for invoicing
    pub electric: Option<MeterReading>,
    /// When the group was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ReadingGroup {
    /// Create an empty group for a room
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id: room_id.into(),
            water: None,
            electric: None,
            recorded_at: Utc::now(),
        }
    }

    /// Attach the water reading
    pub fn with_water(mut self, reading: MeterReading) -> Self {
        self.water = Some(reading);
        self
    }

    /// Attach the electric reading
    pub fn with_electric(mut self, reading: MeterReading) -> Self {
        self.electric = Some(reading);
        self
    }
}
