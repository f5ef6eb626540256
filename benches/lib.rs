use criterion::{criterion_group, criterion_main};

mod parameters;

criterion_group!(
    benches,
    magnification::bench_magnification,
    magnification::bench_yoo_factors,
    parameters::bench_fancy_parameters,
);
criterion_main!(benches);
