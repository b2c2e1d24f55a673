//! # Horpak PromptPay
//!
//! Thailand PromptPay QR payload encoder (EMVCo merchant-presented TLV
//! format) for Horpak invoices.
//!
//! ## Payload Layout
//!
//! ```text
//! 00 02 01                  payload format indicator
//! 01 02 11|12               point of initiation (12 = one-time amount)
//! 29 xx <AID + identifier>  PromptPay merchant account block
//! 53 03 764                 currency (THB)
//! 54 xx <amount>            only when an amount is given
//! 58 02 TH                  country
//! 63 04 <CRC>               CRC-16/CCITT-FALSE over everything before it
//! ```
//!
//! The encoder is a chain of pure functions: normalize the identifier,
//! emit the fields in this exact order, seal with the checksum. The output
//! string goes straight to a QR rendering library; an empty string means
//! "nothing to render".

pub mod crc;
pub mod payload;
pub mod tlv;

pub use crc::{checksum_hex, crc16_ccitt_false};
pub use payload::{build_payload, normalize_id, TargetType};
