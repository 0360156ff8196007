use chartkit_core::{Chart, ChartConfig, ChartKind};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_add_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_series");
    let y: Vec<f64> = (0..256).map(|i| i as f64).collect();
    for &count in &[100usize, 1_000usize] {
        let names: Vec<String> = (0..count).map(|i| format!("series-{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &names, |b, names| {
            b.iter_batched(
                || Chart::new(ChartKind::Xy, ChartConfig::default()).expect("valid config"),
                |mut chart| {
                    for name in names {
                        let _ = chart.add_xy_series_auto(name, &y);
                    }
                    black_box(chart.series_map().len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_update_series(c: &mut Criterion) {
    let mut chart = Chart::new(ChartKind::Xy, ChartConfig::default()).expect("valid config");
    for i in 0..500 {
        let _ = chart.add_xy_series_auto(&format!("series-{i}"), &[0.0]);
    }
    let y: Vec<f64> = (0..1_024).map(|i| i as f64 * 0.5).collect();
    c.bench_function("update_series_mid", |b| {
        b.iter(|| {
            let _ = black_box(chart.update_xy_series("series-250", None, &y, None));
        });
    });
}

criterion_group!(benches, bench_add_series, bench_update_series);
criterion_main!(benches);
