use chartkit_core::{AxisId, Chart, ChartConfig, ChartKind};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_xy(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|t| 100.0 + (t * 0.01).sin() * 20.0 + 1.0).collect();
    (x, y)
}

fn bench_axis_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_range");
    for &n in &[10_000usize, 200_000usize] {
        let (x, y) = gen_xy(n);
        for log in [false, true] {
            let mut chart = Chart::new(ChartKind::Xy, ChartConfig::default()).expect("valid config");
            chart.y_axis_mut().set_logarithmic(log);
            chart.add_xy_series("s", &x, &y).expect("positive data");
            let label = if log { "log" } else { "linear" };
            group.bench_function(BenchmarkId::new(label, n), |b| {
                b.iter(|| black_box(chart.axis_range(AxisId::Y(0)).map(|r| r.ticks())));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_axis_range);
criterion_main!(benches);
