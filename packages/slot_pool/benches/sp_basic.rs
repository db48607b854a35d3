//! Basic benchmarks for the `slot_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use slot_pool::{IndexedObjectPool, ObjectPool, Pool, ReusePolicy};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

const CAPACITY: usize = 10_000;

fn full_pool<P: ReusePolicy>() -> Pool<TestItem, P> {
    let mut pool = Pool::<TestItem, P>::with_capacity(CAPACITY).unwrap();

    while let Some(mut item) = pool.activate() {
        *item = TEST_VALUE;
    }

    pool
}

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_pool_basic");

    group.bench_function("build_10k", |b| {
        b.iter(|| drop(black_box(ObjectPool::<TestItem>::with_capacity(CAPACITY))));
    });

    group.bench_function("activate_deactivate_lifo", |b| {
        let mut pool = ObjectPool::<TestItem>::with_capacity(CAPACITY).unwrap();

        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let index = black_box(pool.activate()).unwrap().index();
                pool.deactivate(index).unwrap();
            }

            start.elapsed()
        });
    });

    group.bench_function("activate_deactivate_indexed", |b| {
        let mut pool = IndexedObjectPool::<TestItem>::with_capacity(CAPACITY).unwrap();

        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let index = black_box(pool.activate()).unwrap().index();
                pool.deactivate(index).unwrap();
            }

            start.elapsed()
        });
    });

    group.bench_function("read_one", |b| {
        let pool = full_pool::<slot_pool::LastFreedFirst>();

        b.iter(|| black_box(pool[black_box(CAPACITY / 2)]));
    });

    group.finish();

    let mut group = c.benchmark_group("slot_pool_slow");

    group.bench_function("clear_10k", |b| {
        let mut pool = full_pool::<slot_pool::LowestIndexFirst>();

        b.iter(|| {
            pool.clear();
            black_box(&pool);
        });
    });

    group.bench_function("iter_active_sparse_indexed", |b| {
        let mut pool = IndexedObjectPool::<TestItem>::with_capacity(CAPACITY).unwrap();
        for _ in 0..16 {
            _ = pool.activate();
        }

        b.iter(|| black_box(pool.iter_active().count()));
    });

    group.bench_function("iter_active_sparse_lifo", |b| {
        let mut pool = ObjectPool::<TestItem>::with_capacity(CAPACITY).unwrap();
        for _ in 0..16 {
            _ = pool.activate();
        }

        b.iter(|| black_box(pool.iter_active().count()));
    });

    group.finish();
}
