//! PromptPay payload assembly
//!
//! Normalizes a payee identifier, lays the TLV fields out in the exact
//! order EMV QR parsers expect, and seals the payload with its CRC. Field
//! order matters: the merchant block and the amount are optional blocks
//! whose position is part of the wire format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crc::checksum_hex;
use crate::tlv::{
    tlv, COUNTRY_TH, CURRENCY_THB, PROMPTPAY_AID, TAG_AMOUNT, TAG_CHECKSUM, TAG_COUNTRY,
    TAG_CURRENCY, TAG_MERCHANT_INFO, TAG_PAYLOAD_FORMAT, TAG_POINT_OF_INITIATION,
};

/// The kind of identity a payment is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Thai mobile number
    Phone,
    /// 13-digit national ID
    NationalId,
    /// e-wallet account ID
    EWallet,
}

impl TargetType {
    /// Sub-tag inside the merchant account block
    pub fn sub_tag(&self) -> &'static str {
        match self {
            TargetType::Phone => "01",
            TargetType::NationalId => "02",
            TargetType::EWallet => "03",
        }
    }
}

/// Normalize a raw payee identifier.
///
/// Strips whitespace and hyphens. Phone numbers in the domestic form
/// (leading "0") are rewritten to the 66 country-code form. An identifier
/// that is empty after normalization comes back as an empty string, the
/// "no payload" sentinel.
pub fn normalize_id(raw: &str, target_type: TargetType) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.is_empty() {
        return cleaned;
    }

    match target_type {
        TargetType::Phone if cleaned.starts_with('0') => format!("66{}", &cleaned[1..]),
        _ => cleaned,
    }
}

/// Build the nested merchant account block: AID plus the typed identifier,
/// wrapped under tag "29"
fn merchant_account(id: &str, target_type: TargetType) -> String {
    let nested = format!(
        "{}{}",
        tlv("00", PROMPTPAY_AID),
        tlv(target_type.sub_tag(), id)
    );
    tlv(TAG_MERCHANT_INFO, &nested)
}

/// Build a complete PromptPay QR payload.
///
/// Returns an empty string when the identifier normalizes to nothing; the
/// QR rendering layer treats that as "no code to draw". A present `amount`
/// is rendered with exactly two decimal places and switches the payload to
/// one-time point of initiation.
pub fn build_payload(raw_id: &str, target_type: TargetType, amount: Option<Decimal>) -> String {
    let id = normalize_id(raw_id, target_type);
    if id.is_empty() {
        debug!("identifier empty after normalization, no payload produced");
        return String::new();
    }

    let initiation = if amount.is_some() { "12" } else { "11" };

    let mut payload = String::new();
    payload.push_str(&tlv(TAG_PAYLOAD_FORMAT, "01"));
    payload.push_str(&tlv(TAG_POINT_OF_INITIATION, initiation));
    payload.push_str(&merchant_account(&id, target_type));
    payload.push_str(&tlv(TAG_CURRENCY, CURRENCY_THB));
    if let Some(amount) = amount {
        payload.push_str(&tlv(TAG_AMOUNT, &format!("{:.2}", amount.round_dp(2))));
    }
    payload.push_str(&tlv(TAG_COUNTRY, COUNTRY_TH));

    // The checksum field's own tag and length are covered by the CRC
    payload.push_str(TAG_CHECKSUM);
    payload.push_str("04");
    let checksum = checksum_hex(&payload);
    payload.push_str(&checksum);
    payload
}
