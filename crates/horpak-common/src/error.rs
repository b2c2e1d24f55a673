//! Error types for the Horpak billing core
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using HorpakError
pub type Result<T> = std::result::Result<T, HorpakError>;

/// Unified error type for Horpak operations
#[derive(Debug, Error)]
pub enum HorpakError {
    // Billing errors
    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    // Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Invoice generation and meter-reading errors
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("electric reading required")]
    ElectricReadingRequired,

    #[error("water reading required before generating invoice")]
    WaterReadingRequired,

    #[error("meter reading out of order: current {current} < previous {previous}")]
    ReadingOutOfOrder { previous: Decimal, current: Decimal },

    #[error("meter reading cannot be negative: {0}")]
    NegativeReading(Decimal),

    #[error("room rent cannot be negative: {0}")]
    NegativeRent(Decimal),
}

// Implement From for common external error types
impl From<serde_json::Error> for HorpakError {
    fn from(err: serde_json::Error) -> Self {
        HorpakError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for HorpakError {
    fn from(err: anyhow::Error) -> Self {
        HorpakError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = HorpakError::Billing(BillingError::WaterReadingRequired);
        assert!(err.to_string().contains("water reading required"));
    }

    #[test]
    fn test_out_of_order_reading_error() {
        let err = BillingError::ReadingOutOfOrder {
            previous: dec!(120),
            current: dec!(115),
        };
        assert!(err.to_string().contains("115 < previous 120"));
    }
}
