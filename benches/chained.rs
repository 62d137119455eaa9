#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::{ChainMap, ChainSet};
use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{prelude::{any, Strategy}, strategy::ValueTree, test_runner::TestRunner};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Chained hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chained_map = ChainMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chained insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                let _res = chained_map.set(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chained get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

fn hash_set_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let keys = any::<[String; ITEMS_AMOUNT]>().new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Chained hash set benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chained_set = ChainSet::new();
    group.bench_function("chained add", |b| {
        b.iter(|| {
            for key in keys.clone() {
                let _res = chained_set.add(key);
            }
        });
    });
    group.bench_function("chained has", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = chained_set.has(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches, hash_set_benches);

criterion_main!(benches);
