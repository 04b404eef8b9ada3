//! Class resolution and composition benchmarks.
//!
//! Resolution runs on every render, so these track the per-render cost of
//! resolving, merging, and rendering through layered units.
//!
//! Run with: `cargo bench -p styledwind --bench resolve_benchmarks`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use styledwind::{ChoiceMap, Config, Props, Styled, merge_configs, resolve};

/// A configuration with `keys` flag entries, one choice entry, and one variant.
fn wide_config(keys: usize) -> Config {
    let mut config = Config::new().with_base("inline-flex items-center").with_choices(
        "size",
        ChoiceMap::new()
            .with("sm", "px-2 text-sm")
            .with("md", "px-4 text-base")
            .with("lg", "px-6 text-lg"),
    );
    for i in 0..keys {
        config = config.with_class(format!("flag{i}"), format!("utility-{i}"));
    }
    config.with_variant("hover", "underline opacity-90")
}

fn half_active_props(keys: usize) -> Props {
    let mut props = Props::new().with("size", "md").with("id", "target");
    for i in (0..keys).step_by(2) {
        props.insert(format!("flag{i}"), true);
    }
    props
}

// ============================================================================
// Resolution
// ============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for keys in [4, 16, 64] {
        let config = wide_config(keys);
        let props = half_active_props(keys);
        group.throughput(Throughput::Elements(config.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("flags", keys),
            &(config, props),
            |b, (config, props)| b.iter(|| resolve(black_box(config), black_box(props))),
        );
    }

    group.finish();
}

// ============================================================================
// Merging
// ============================================================================

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let base = wide_config(16);
    let overlapping = Config::new()
        .with_base("shadow")
        .with_choices("size", ChoiceMap::new().with("lg", "py-3").with("xl", "px-8"))
        .with_class("flag0", "ring");
    let disjoint = Config::new().with_class("elevated", "shadow-lg");

    group.bench_function("absent_extension", |b| {
        b.iter(|| merge_configs(black_box(&base), None))
    });
    group.bench_function("overlapping_extension", |b| {
        b.iter(|| merge_configs(black_box(&base), Some(black_box(&overlapping))))
    });
    group.bench_function("disjoint_extension", |b| {
        b.iter(|| merge_configs(black_box(&base), Some(black_box(&disjoint))))
    });

    group.finish();
}

// ============================================================================
// Layered Rendering
// ============================================================================

fn layered(depth: usize) -> Styled {
    let mut unit = Arc::new(Styled::element("button", wide_config(8)).unwrap());
    for layer in 0..depth {
        let config = Config::new()
            .with_base(format!("layer-{layer}"))
            .with_class("flag0", format!("flag0-layer-{layer}"));
        unit = Arc::new(Styled::wrap(unit, config));
    }
    Arc::unwrap_or_clone(unit)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for depth in [0, 2, 8] {
        let unit = layered(depth);
        let props = half_active_props(8).with_class_name("mt-2");
        group.bench_with_input(BenchmarkId::new("depth", depth), &unit, |b, unit| {
            b.iter(|| unit.render(black_box(props.clone()), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_merge, bench_render);
criterion_main!(benches);
