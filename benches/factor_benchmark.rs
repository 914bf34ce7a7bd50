use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pfactor::factor::factorize_with_threads;

fn bench_semiprime_threads(c: &mut Criterion) {
    // 999961 * 999979: the scan must cover the whole window before the
    // residual prime is known, so thread scaling is visible here.
    let n: i128 = 999_940_000_819;
    let mut group = c.benchmark_group("semiprime");
    for threads in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &t| {
            b.iter(|| factorize_with_threads(black_box(n), t))
        });
    }
    group.finish();
}

fn bench_smooth_number(c: &mut Criterion) {
    // 2^30 * 5^30: dominated by the sequential pre-pass and an early hit
    let n: i128 = 1_000_000_000_000_000_000_000_000_000_000;
    c.bench_function("smooth_10_pow_30", |b| {
        b.iter(|| factorize_with_threads(black_box(n), 4))
    });
}

fn bench_large_prime(c: &mut Criterion) {
    // Prime input: every worker exhausts its window with no hit
    let n: i128 = 999_999_937;
    c.bench_function("prime_999999937", |b| {
        b.iter(|| factorize_with_threads(black_box(n), 4))
    });
}

criterion_group!(
    benches,
    bench_semiprime_threads,
    bench_smooth_number,
    bench_large_prime
);
criterion_main!(benches);
