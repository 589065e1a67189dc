//! Performance benchmarks for iconsmith-codegen.
//!
//! Measures:
//! - Full in-memory runs across asset counts (1, 10, 100, 500)
//! - The built-in optimizer on a single document
//! - Component rendering
//!
//! Run with: cargo bench --package iconsmith-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use iconsmith_codegen::{ComponentGenerator, DefaultOptimizer, IconPipeline};
use iconsmith_core::{ExportName, GeneratorConfig};
use iconsmith_files::MemoryStore;
use std::hint::black_box;

const ICON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Sketch -->
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none">
  <title>icon</title>
  <path stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" d="M19 12H5M12 19l-7-7 7-7"/>
  <circle cx="12" cy="12" r="10" fill-rule="evenodd" clip-rule="evenodd"/>
</svg>
"#;

fn store_with(count: usize) -> MemoryStore {
    (0..count)
        .fold(MemoryStore::builder(), |builder, i| {
            builder.add_file(format!("icons/icon-{i}.svg"), ICON)
        })
        .build()
}

fn bench_full_run(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    let mut group = c.benchmark_group("full_run");
    for count in [1, 10, 100, 500] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                runtime.block_on(async {
                    let pipeline = IconPipeline::new(
                        GeneratorConfig::default(),
                        store_with(count),
                        DefaultOptimizer::new(),
                    );
                    black_box(pipeline.run().await.expect("run succeeds"))
                })
            });
        });
    }
    group.finish();
}

fn bench_optimizer(c: &mut Criterion) {
    let optimizer = DefaultOptimizer::new();
    c.bench_function("optimize_markup", |b| {
        b.iter(|| optimizer.optimize_markup(black_box(ICON)));
    });
}

fn bench_render_component(c: &mut Criterion) {
    let generator = ComponentGenerator::new(24).expect("templates register");
    let markup = DefaultOptimizer::new()
        .optimize_markup(ICON)
        .expect("icon optimizes");
    let name = ExportName::from_base("arrow-left", "Icon");

    c.bench_function("render_component", |b| {
        b.iter(|| generator.render_component(black_box(&name), black_box(&markup)));
    });
}

criterion_group!(
    benches,
    bench_full_run,
    bench_optimizer,
    bench_render_component
);
criterion_main!(benches);
