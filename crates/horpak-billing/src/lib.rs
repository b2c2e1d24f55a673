//! # Horpak Billing
//!
//! Billing calculation for the Horpak dormitory management system.
//!
//! ## Amount Formula
//!
//! ```text
//! subtotal = water + electric + rent
//! tax      = subtotal × tax_rate / 100
//! total    = subtotal + tax
//! ```
//!
//! Where water is either consumption × rate (metered mode) or a flat fee
//! (fixed mode), and electric is always consumption × rate. Consumption is
//! `max(0, current − previous)` over one meter's reading pair.

pub mod calculator;
pub mod invoice;

pub use calculator::BillingCalculator;
pub use invoice::generate_invoice;
