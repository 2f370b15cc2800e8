mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pattern_canvas::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator_benches(c: &mut Criterion) {
    let customs = builtin_customs();

    for kind in MethodKind::ALL {
        let mut group = c.benchmark_group(format!("generate/{kind}"));

        for &count in &common::COUNTS {
            let settings = common::hd_settings(kind, count, Shape::Lines);
            let mut rng_est = StdRng::seed_from_u64(0x5EED_u64 ^ count as u64);
            let expected = settings.generate(&customs, &mut rng_est).len();
            group.throughput(common::elements_throughput(expected));

            let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ count as u64);
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    let elements = settings.generate(&customs, &mut rng);
                    black_box(elements.len());
                });
            });
        }

        group.finish();
    }
}

fn scale_factor_bench(c: &mut Criterion) {
    c.bench_function("generate/scale_factor", |b| {
        b.iter(|| black_box(size_scale_factor(black_box(3840.0), black_box(2160.0))));
    });
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = generator_benches, scale_factor_bench
}
criterion_main!(benches);
