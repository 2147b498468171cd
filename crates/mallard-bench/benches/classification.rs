//! Criterion benchmarks for full classification runs.

use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mallard_bench::{reference_profile, stress_profile};
use mallard_engine::{probe, run};

fn bench_run_1k(c: &mut Criterion) {
    c.bench_function("run_1k", |b| {
        b.iter(|| {
            let (catalog, config) = reference_profile(42);
            let mut sink = io::sink();
            let results = run(&catalog, config, &mut sink).unwrap();
            black_box(&results);
        });
    });
}

fn bench_run_100k(c: &mut Criterion) {
    c.bench_function("run_100k", |b| {
        b.iter(|| {
            let (catalog, config) = stress_profile(42);
            let mut sink = io::sink();
            let results = run(&catalog, config, &mut sink).unwrap();
            black_box(&results);
        });
    });
}

fn bench_probe(c: &mut Criterion) {
    let catalog = mallard_animals::standard_catalog();
    let duck = catalog.by_name("Duck").unwrap().spawn();
    let cow = catalog.by_name("Cow").unwrap().spawn();

    c.bench_function("probe_duck", |b| {
        b.iter(|| {
            let mut sink = io::sink();
            let result = probe(duck.as_ref(), &mut sink).unwrap();
            black_box(&result);
        });
    });

    c.bench_function("probe_non_duck", |b| {
        b.iter(|| {
            let mut sink = io::sink();
            let result = probe(cow.as_ref(), &mut sink).unwrap();
            black_box(&result);
        });
    });
}

criterion_group!(benches, bench_run_1k, bench_run_100k, bench_probe);
criterion_main!(benches);
