use crumble_chart::api::{ChartMetadata, ChartOptions, create};
use crumble_chart::core::{PlotArea, project_series};
use crumble_chart::render::{NullSurface, Scene};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave(len: usize, phase: f64) -> Vec<f64> {
    (0..len)
        .map(|i| 50.0 + 40.0 * ((i as f64) * 0.05 + phase).sin())
        .collect()
}

fn bench_series_projection_10k(c: &mut Criterion) {
    let area = PlotArea::new(1920.0, 1080.0, 12.0, 100.0, 0.0);
    let values: Vec<Option<f64>> = wave(10_000, 0.0).into_iter().map(Some).collect();

    c.bench_function("series_projection_10k", |b| {
        b.iter(|| {
            let _ = project_series(black_box(&values), black_box(area));
        })
    });
}

fn bench_metadata_build(c: &mut Criterion) {
    let mut options = ChartOptions::new("bench", 1920.0, 1080.0);
    for series in 0..8 {
        options = options.with_series(wave(2_000, f64::from(series)));
    }

    c.bench_function("metadata_build_8x2k", |b| {
        b.iter(|| {
            let _ = ChartMetadata::build(black_box(&options));
        })
    });
}

fn bench_shaded_render(c: &mut Criterion) {
    let options = ChartOptions::new("bench", 1920.0, 1080.0)
        .with_series(wave(500, 0.0))
        .with_series(wave(500, 1.0))
        .with_series(wave(500, 2.0))
        .with_padding(12.0)
        .with_shades(true);

    c.bench_function("shaded_render_null_surface_3x500", |b| {
        b.iter(|| {
            let _ = create::<NullSurface>(black_box(&options)).expect("render should succeed");
        })
    });

    c.bench_function("shaded_render_scene_svg_3x500", |b| {
        b.iter(|| {
            let chart = create::<Scene>(black_box(&options)).expect("render should succeed");
            let _ = chart.surface.to_svg_string();
        })
    });
}

criterion_group!(
    benches,
    bench_series_projection_10k,
    bench_metadata_build,
    bench_shaded_render
);
criterion_main!(benches);
