use chart_data::palette::color_for;
use chart_data::{validate_chart_data, ChartData, ChartKind, Column, Row};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_chart(rows: usize) -> ChartData {
    let columns = vec![
        Column::new("Month", color_for(0)),
        Column::new("Sales", color_for(1)),
        Column::new("Profit", color_for(2)),
    ];
    let rows = (0..rows)
        .map(|i| {
            Row::new()
                .with("Month", format!("m{i}"))
                .with("Sales", i as f64)
                .with("Profit", format!("{}", i % 100))
        })
        .collect();
    ChartData::new(columns, rows)
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_chart_data");
    for &n in &[100usize, 1_000, 10_000] {
        let chart = gen_chart(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &chart, |b, chart| {
            b.iter(|| black_box(validate_chart_data(chart, ChartKind::Bar)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
