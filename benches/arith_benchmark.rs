// Copyright (c) 2026 the numera developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numera::{factorial, fibonacci, is_prime, prime_factors};
use std::hint::black_box;

fn bench_sequences(c: &mut Criterion) {
    c.bench_function("factorial/20", |b| {
        b.iter(|| factorial(black_box(20)))
    });
    c.bench_function("fibonacci/93", |b| {
        b.iter(|| fibonacci(black_box(93)))
    });
}

fn bench_primality(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");
    // A large prime is the worst case: the wheel runs all the way to
    // sqrt(n) without finding a divisor.
    for n in [1_000_003i64, 1_000_000_007, 2_147_483_647] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| is_prime(black_box(n)))
        });
    }
    group.finish();
}

fn bench_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_factors");
    // Smooth, mixed, and prime inputs cover the spectrum from
    // division-dominated to scan-dominated work.
    for (name, n) in [
        ("smooth/360", 360i64),
        ("mixed/2000006", 2_000_006),
        ("prime/1000003", 1_000_003),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &n, |b, &n| {
            b.iter(|| prime_factors(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequences,
    bench_primality,
    bench_factorization
);
criterion_main!(benches);
