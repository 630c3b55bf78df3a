use criterion::criterion_main;

mod scaling;
mod validation;

criterion_main!(
    validation::validation_benches,
    scaling::scaling_benches,
);
