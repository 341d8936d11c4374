//! Benchmarks for routing and page rendering
//!
//! Run with: cargo bench

use aadhaar_insights::chart::{ChartRenderer, SvgRenderer, TextRenderer};
use aadhaar_insights::config::DashboardConfig;
use aadhaar_insights::dashboard::{route, Section};
use aadhaar_insights::dataset::DatasetRegistry;
use aadhaar_insights::render::{render_page, render_text, PageOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");

    for section in Section::all() {
        group.bench_function(section.id(), |b| b.iter(|| route(black_box(*section))));
    }

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    let registry = DatasetRegistry::global();
    let svg = SvgRenderer::default();
    let text = TextRenderer::default();

    let layout = route(Section::Overview);
    for (index, chart) in layout.charts().enumerate() {
        let dataset = registry.dataset(chart.dataset);

        group.bench_function(format!("svg_{}_{}", index, chart.kind), |b| {
            b.iter(|| svg.render(black_box(chart), black_box(&dataset)).unwrap())
        });

        group.bench_function(format!("text_{}_{}", index, chart.kind), |b| {
            b.iter(|| text.render(black_box(chart), black_box(&dataset)).unwrap())
        });
    }

    group.finish();
}

fn bench_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("page");
    let registry = DatasetRegistry::global();
    let config = DashboardConfig::default();

    for section in Section::all() {
        let layout = route(*section);

        group.bench_function(format!("html_{}", section.id()), |b| {
            let options = PageOptions {
                config: &config,
                active: *section,
                layout: Some(&layout),
            };
            b.iter(|| render_page(black_box(&options), registry).unwrap())
        });

        group.bench_function(format!("text_{}", section.id()), |b| {
            let renderer = TextRenderer::default();
            b.iter(|| render_text(black_box(&layout), registry, &renderer, true).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route, bench_charts, bench_page);
criterion_main!(benches);
