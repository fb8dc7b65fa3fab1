//! BLISS-B Benchmarks
//!
//! Covers key generation, both signing paths and verification for every
//! parameter profile.
//!
//! ```bash
//! cargo bench -p bliss-bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bliss_b::{Entropy, PrivateKey};

fn seed() -> [u8; 64] {
    core::array::from_fn(|i| (i % 8) as u8)
}

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLISS-B KeyGen");
    for version in 0..5u8 {
        group.bench_function(BenchmarkId::from_parameter(version), |b| {
            b.iter_batched(
                || Entropy::new(&seed()).unwrap(),
                |mut e| black_box(PrivateKey::generate(version, &mut e).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLISS-B Sign");
    for version in 0..5u8 {
        let mut e = Entropy::new(&seed()).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        group.bench_function(BenchmarkId::from_parameter(version), |b| {
            b.iter(|| black_box(key.sign(b"Hello world", &mut e).unwrap()));
        });
    }
    group.finish();
}

fn bench_sign_hardened(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLISS-B Sign (hardened)");
    for version in 0..5u8 {
        let mut e = Entropy::new(&seed()).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        group.bench_function(BenchmarkId::from_parameter(version), |b| {
            b.iter(|| {
                black_box(
                    key.sign_against_side_channel(b"Hello world", &mut e)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLISS-B Verify");
    for version in 0..5u8 {
        let mut e = Entropy::new(&seed()).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        let pk = key.public_key();
        let sig = key.sign(b"Hello world", &mut e).unwrap();
        group.bench_function(BenchmarkId::from_parameter(version), |b| {
            b.iter(|| black_box(pk.verify(b"Hello world", &sig).is_ok()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_keygen,
    bench_sign,
    bench_sign_hardened,
    bench_verify
);
criterion_main!(benches);
