//! # Horpak Common
//!
//! Shared types and errors for the Horpak dormitory billing core.
//!
//! ## Core Types
//!
//! - [`MeterReading`]: one water or electric measurement event
//! - [`ReadingGroup`]: paired readings for one room on one date
//! - [`BillingSettings`]: team tariff configuration
//! - [`InvoiceAmounts`]: the derived monetary breakdown for an invoice

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BillingError, HorpakError, Result};
pub use types::{
    invoice::InvoiceAmounts,
    meter::{MeterReading, MeterType, ReadingGroup},
    settings::{BillingSettings, WaterBillingMode},
};

/// Horpak version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Currency used when settings do not specify one
pub const DEFAULT_CURRENCY: &str = "THB";
