//! Domain types shared across the billing core

pub mod invoice;
pub mod meter;
pub mod settings;
