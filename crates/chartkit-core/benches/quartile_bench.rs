use chartkit_core::{BoxStats, QuartileMethod};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_samples(n: usize) -> Vec<f64> {
    // deterministic, unsorted, with a few far outliers
    let mut v = Vec::with_capacity(n);
    let mut x = 0.5f64;
    for i in 0..n {
        x = (x * 3.7 + 0.13).fract();
        let spike = if i % 997 == 0 { 50.0 } else { 0.0 };
        v.push(x * 10.0 + spike);
    }
    v
}

fn bench_box_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stats");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen_samples(n);
        for method in QuartileMethod::ALL {
            group.bench_with_input(BenchmarkId::new(format!("{method:?}"), n), &data, |b, d| {
                b.iter(|| black_box(BoxStats::compute(d, method)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_box_stats);
criterion_main!(benches);
