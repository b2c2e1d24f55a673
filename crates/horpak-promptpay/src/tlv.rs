//! EMV Tag-Length-Value encoding
//!
//! Every field in a PromptPay payload is `tag + two-digit length + value`;
//! the merchant account block nests TLVs inside an outer TLV. Field tags
//! follow the EMVCo merchant-presented QR layout.

/// Payload format indicator, always "01"
pub const TAG_PAYLOAD_FORMAT: &str = "00";
/// Point of initiation: "11" reusable, "12" one-time with amount
pub const TAG_POINT_OF_INITIATION: &str = "01";
/// Merchant account information (the PromptPay block)
pub const TAG_MERCHANT_INFO: &str = "29";
/// Transaction currency, ISO 4217 numeric
pub const TAG_CURRENCY: &str = "53";
/// Transaction amount, present only for one-time payloads
pub const TAG_AMOUNT: &str = "54";
/// Country code
pub const TAG_COUNTRY: &str = "58";
/// CRC checksum, always the final field
pub const TAG_CHECKSUM: &str = "63";

/// PromptPay application ID, the first sub-field of the merchant block
pub const PROMPTPAY_AID: &str = "A000000677010111";
/// ISO 4217 numeric code for Thai Baht
pub const CURRENCY_THB: &str = "764";
/// Country code for Thailand
pub const COUNTRY_TH: &str = "TH";

/// Encode one TLV field.
///
/// Length is the character count of `value`, zero-padded to two digits.
/// Values longer than 99 characters cannot occur in this format; that is a
/// programming invariant of the callers, not a runtime condition.
pub fn tlv(tag: &str, value: &str) -> String {
    debug_assert!(value.len() <= 99, "TLV value exceeds two-digit length");
    format!("{}{:02}{}", tag, value.len(), value)
}
