use crate::common::{company, configure_criterion};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use validation_rail::rules::TagRules;
use validation_rail::Validator;

pub fn bench_collection_size_scaling(c: &mut Criterion) {
    let validator = Validator::new(TagRules::new());
    let mut group = c.benchmark_group("scaling/collection_size");

    for size in [10, 100, 1000, 5000] {
        let company = company(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &company, |b, company| {
            b.iter(|| black_box(validator.validate(black_box(company))))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_collection_size_scaling,
}
