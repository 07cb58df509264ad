//! Criterion benchmarks for the Monte Carlo touch engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::curves::FlatCurve;
use pricer_core::types::Date;
use pricer_models::instruments::{TouchOption, TouchPayoffType};
use pricer_models::market::TouchMarket;
use pricer_pricing::mc::{
    generate_antithetic_gbm_paths, GbmParams, PathWorkspace, TouchMcConfig, TouchMcPricer,
};
use pricer_pricing::rng::PricerRng;

fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("antithetic_paths");
    for n_paths in [1_000_usize, 10_000] {
        let mut workspace = PathWorkspace::default();
        workspace.ensure_capacity(n_paths, 253);
        PricerRng::from_seed(4242).fill_normal(workspace.randoms_mut());
        group.bench_with_input(BenchmarkId::from_parameter(n_paths), &n_paths, |b, &n| {
            b.iter(|| {
                generate_antithetic_gbm_paths(
                    &mut workspace,
                    black_box(GbmParams::default()),
                    n,
                    253,
                )
            })
        });
    }
    group.finish();
}

fn bench_touch_valuation(c: &mut Criterion) {
    let valuation = Date::from_ymd(2024, 1, 2).unwrap();
    let discount = FlatCurve::new(0.05);
    let dividend = FlatCurve::new(0.02);
    let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);

    let mut group = c.benchmark_group("touch_mc");
    group.sample_size(10);
    for (payoff, barrier) in [
        (TouchPayoffType::UpAndInCashAtHit, 110.0),
        (TouchPayoffType::DownAndOutAssetOrNothing, 90.0),
    ] {
        let option = TouchOption::new(valuation.add_days(365), payoff, barrier, 1.0).unwrap();
        for threshold in [usize::MAX, 1] {
            let config = TouchMcConfig::builder()
                .parallel_threshold(threshold)
                .build()
                .unwrap();
            let mut pricer = TouchMcPricer::new(config).unwrap();
            let mode = if threshold == 1 { "parallel" } else { "sequential" };
            group.bench_function(BenchmarkId::new(payoff.name(), mode), |b| {
                b.iter(|| pricer.price(black_box(&option), &market))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_path_generation, bench_touch_valuation);
criterion_main!(benches);
