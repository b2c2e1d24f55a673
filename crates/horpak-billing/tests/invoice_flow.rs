//! End-to-end invoice generation over API-shaped data
//!
//! Reading groups and settings arrive from the REST layer as JSON; this
//! exercises the full path from deserialized records to a finished
//! breakdown.

use horpak_billing::generate_invoice;
use horpak_common::{BillingSettings, ReadingGroup};
use rust_decimal_macros::dec;

#[test]
fn invoice_from_deserialized_reading_group() {
    let group: ReadingGroup = serde_json::from_str(
        r#"{
            "id": "7f4df3dc-5b0a-4f9c-9c2a-6f9a5d0f8f11",
            "room_id": "A-301",
            "water": {
                "meter_type": "water",
                "previous": "118.0",
                "current": "123.5",
                "recorded_at": "2026-08-01T09:00:00Z"
            },
            "electric": {
                "meter_type": "electric",
                "previous": "4410.0",
                "current": "4530.0",
                "recorded_at": "2026-08-01T09:00:00Z"
            },
            "recorded_at": "2026-08-01T09:00:00Z"
        }"#,
    )
    .unwrap();

    let settings: BillingSettings = serde_json::from_str(
        r#"{
            "water_billing_mode": "metered",
            "water_rate_per_unit": "18",
            "water_fixed_fee": "0",
            "electric_rate_per_unit": "8",
            "tax_rate": "7",
            "currency": "THB"
        }"#,
    )
    .unwrap();

    let amounts = generate_invoice(&group, &settings, Some(dec!(4500))).unwrap();

    // water: 5.5 * 18 = 99, electric: 120 * 8 = 960
    assert_eq!(amounts.water_subtotal, dec!(99));
    assert_eq!(amounts.electric_subtotal, dec!(960));
    assert_eq!(amounts.subtotal, dec!(5559));
    assert_eq!(amounts.tax, dec!(389.13));
    assert_eq!(amounts.total, dec!(5948.13));
}

#[test]
fn fixed_mode_group_without_water_reading() {
    let group: ReadingGroup = serde_json::from_str(
        r#"{
            "id": "9a1df3dc-5b0a-4f9c-9c2a-6f9a5d0f8f22",
            "room_id": "B-110",
            "water": null,
            "electric": {
                "meter_type": "electric",
                "previous": "300",
                "current": "355",
                "recorded_at": "2026-08-01T09:00:00Z"
            },
            "recorded_at": "2026-08-01T09:00:00Z"
        }"#,
    )
    .unwrap();

    let settings = BillingSettings::fixed(dec!(150), dec!(8), dec!(7));
    let amounts = generate_invoice(&group, &settings, None).unwrap();

    // electric: 55 * 8 = 440, water flat 150, subtotal 590, tax 41.30
    assert_eq!(amounts.subtotal, dec!(590));
    assert_eq!(amounts.tax, dec!(41.3));
    assert_eq!(amounts.total, dec!(631.3));
}
