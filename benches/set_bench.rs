//! Benchmarks for rankset sorted-set operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use rankset::{Config, SortedSet};

fn populated(n: usize) -> SortedSet {
    let config = Config::builder().rng_seed(1).build();
    let mut set = SortedSet::with_config(&config).expect("valid config");
    for i in 0..n {
        // Pseudo-shuffled scores so towers are exercised, deterministically.
        let score = ((i * 2_654_435_761) % 1_000_003) as f64;
        set.add(format!("member:{i:07}").as_str(), score)
            .expect("in-memory add");
    }
    set
}

fn set_benchmarks(c: &mut Criterion) {
    let set = populated(100_000);

    c.bench_function("add_10k_fresh", |b| {
        b.iter_batched(
            SortedSet::new,
            |mut set| {
                for i in 0..10_000usize {
                    let score = ((i * 2_654_435_761) % 1_000_003) as f64;
                    set.add(format!("member:{i:07}").as_str(), score)
                        .expect("in-memory add");
                }
                set
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("score_lookup_100k", |b| {
        b.iter(|| black_box(set.score(black_box(b"member:0050000"))))
    });

    c.bench_function("rank_query_100k", |b| {
        b.iter(|| black_box(set.rank(black_box(b"member:0050000"), false)))
    });

    c.bench_function("range_by_rank_100_of_100k", |b| {
        b.iter(|| black_box(set.range_by_rank(50_000, 50_099, false)))
    });

    c.bench_function("range_by_score_scan_100k", |b| {
        b.iter(|| set.scan_by_score(250_000.0, 260_000.0).count())
    });
}

criterion_group!(benches, set_benchmarks);
criterion_main!(benches);
