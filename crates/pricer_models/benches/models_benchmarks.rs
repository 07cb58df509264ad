//! Criterion benchmarks for the closed-form touch valuer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_core::market_data::curves::FlatCurve;
use pricer_core::types::Date;
use pricer_models::analytical::{touch_price, AnalyticTouchPricer, TouchParams};
use pricer_models::instruments::{TouchOption, TouchPayoffType};
use pricer_models::market::TouchMarket;

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_kernel");
    for payoff in [
        TouchPayoffType::DownAndInCashAtHit,
        TouchPayoffType::UpAndInCashAtExpiry,
        TouchPayoffType::DownAndOutAssetOrNothing,
    ] {
        let barrier = match payoff.direction() {
            pricer_models::instruments::BarrierDirection::Down => 90.0,
            pricer_models::instruments::BarrierDirection::Up => 110.0,
        };
        let params = TouchParams::new(100.0_f64, barrier, 1.0, 0.05, 0.02, 0.2, 1.0, payoff);
        group.bench_function(payoff.name(), |b| {
            b.iter(|| touch_price(black_box(&params)))
        });
    }
    group.finish();
}

fn bench_spot_ladder(c: &mut Criterion) {
    let valuation = Date::from_ymd(2024, 1, 2).unwrap();
    let option = TouchOption::new(
        valuation.add_days(365),
        TouchPayoffType::UpAndOutCashOrNothing,
        130.0,
        1.0,
    )
    .unwrap();
    let discount = FlatCurve::new(0.05);
    let dividend = FlatCurve::new(0.02);
    let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
    let spots: Vec<f64> = (0..1_000).map(|i| 70.0 + 0.05 * i as f64).collect();
    let pricer = AnalyticTouchPricer::new();

    c.bench_function("touch_price_many_1000", |b| {
        b.iter(|| pricer.price_many(black_box(&option), &market, black_box(&spots)))
    });
}

criterion_group!(benches, bench_kernel, bench_spot_ladder);
criterion_main!(benches);
