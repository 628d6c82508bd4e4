use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glicko2_processor::model::{
    config::RatingConfig,
    volatility::{solve_volatility, VolatilityProblem}
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let config = RatingConfig::with_tau(0.5);

    // delta² < phi² + v, so the lower bracket has to be searched for
    let expansion = VolatilityProblem {
        delta: -0.4834,
        phi: 1.1513,
        variance: 1.7785,
        sigma: 0.06,
        tau: 0.5
    };
    // delta² > phi² + v, so the bracket comes straight from delta
    let direct = VolatilityProblem {
        delta: 4.0,
        phi: 0.3,
        variance: 0.5,
        sigma: 0.06,
        tau: 0.5
    };

    c.bench_function("volatility_solve_expansion", |b| {
        b.iter(|| solve_volatility(black_box(&expansion), &config).unwrap())
    });
    c.bench_function("volatility_solve_direct", |b| {
        b.iter(|| solve_volatility(black_box(&direct), &config).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
