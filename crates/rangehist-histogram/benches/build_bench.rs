use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rangehist_histogram::{
    range_normalization, BinSpec, DisplayRange, FixedWidthBuilder, HistogramBuilder,
};

fn bench_fixed_width(c: &mut Criterion) {
    let normal = Normal::new(0.5, 0.1).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data: Vec<f64> = (0..100_000).map(|_| normal.sample(&mut rng)).collect();

    c.bench_function("fixed_width_40_bins", |b| {
        b.iter(|| {
            FixedWidthBuilder::new(40)
                .build(black_box(&data))
                .unwrap()
        })
    });
}

fn bench_range_normalization(c: &mut Criterion) {
    let normal = Normal::new(0.5, 0.1).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data: Vec<f64> = (0..100_000).map(|_| normal.sample(&mut rng)).collect();
    let range = DisplayRange::new(0.4, 0.6).unwrap();

    c.bench_function("range_normalization_40_bins", |b| {
        b.iter(|| range_normalization(black_box(&data), &BinSpec::Count(40), Some(range)).unwrap())
    });
}

criterion_group!(benches, bench_fixed_width, bench_range_normalization);
criterion_main!(benches);
