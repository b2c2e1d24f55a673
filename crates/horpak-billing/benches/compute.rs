//! Billing computation benchmarks
//!
//! The calculator sits on the invoice-generation hot path; these benches
//! keep an eye on the cost of one breakdown under both water billing modes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use horpak_billing::BillingCalculator;
use horpak_common::{BillingSettings, MeterReading, MeterType};
use rust_decimal_macros::dec;

fn bench_metered_compute(c: &mut Criterion) {
    let calculator = BillingCalculator::new(BillingSettings::metered(dec!(18), dec!(8), dec!(7)));
    let water = MeterReading::new(MeterType::Water, dec!(31.2), dec!(44.8));
    let electric = MeterReading::new(MeterType::Electric, dec!(1200.5), dec!(1320.25));

    c.bench_function("compute_metered", |b| {
        b.iter(|| {
            calculator.compute(
                black_box(Some(&water)),
                black_box(&electric),
                black_box(Some(dec!(3500))),
            )
        });
    });
}

fn bench_fixed_compute(c: &mut Criterion) {
    let calculator = BillingCalculator::new(BillingSettings::fixed(dec!(150), dec!(8), dec!(7)));
    let electric = MeterReading::new(MeterType::Electric, dec!(1200.5), dec!(1320.25));

    c.bench_function("compute_fixed", |b| {
        b.iter(|| calculator.compute(black_box(None), black_box(&electric), black_box(None)));
    });
}

criterion_group!(benches, bench_metered_compute, bench_fixed_compute);
criterion_main!(benches);
