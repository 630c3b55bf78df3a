use crate::common::{configure_criterion, realistic_company, Employee};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use validation_rail::rules::TagRules;
use validation_rail::{ReportFormat, Validator, ValidatorConfig};

pub fn bench_single_record(c: &mut Criterion) {
    let valid = Employee::new(1);
    let invalid = Employee::new(5);
    let validator = Validator::new(TagRules::new());

    let mut group = c.benchmark_group("validation/single");

    group.bench_function("valid_employee", |b| {
        b.iter(|| black_box(validator.validate(black_box(&valid))))
    });

    group.bench_function("invalid_employee", |b| {
        b.iter(|| black_box(validator.validate(black_box(&invalid))))
    });

    group.bench_function("cold_rule_cache", |b| {
        b.iter(|| black_box(Validator::new(TagRules::new()).validate(black_box(&invalid))))
    });

    group.finish();
}

pub fn bench_realistic_company(c: &mut Criterion) {
    let company = realistic_company();
    let type_chain = Validator::new(TagRules::new());
    let field_paths = Validator::new(TagRules::new()).with_config(ValidatorConfig::field_paths());

    let mut group = c.benchmark_group("validation/company");

    group.bench_function("type_chain", |b| {
        b.iter(|| black_box(type_chain.validate(black_box(company))))
    });

    group.bench_function("field_paths", |b| {
        b.iter(|| black_box(field_paths.validate(black_box(company))))
    });

    let errors = type_chain.validate(company);
    group.bench_function("render_report", |b| {
        b.iter(|| black_box(errors.format_with(&ReportFormat::numbered())))
    });

    group.finish();
}

criterion_group! {
    name = validation_benches;
    config = configure_criterion();
    targets = bench_single_record, bench_realistic_company,
}
