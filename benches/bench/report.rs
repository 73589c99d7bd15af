// std imports
use std::hint::black_box;

// third-party imports
use criterion::{Criterion, criterion_group};

// local imports
use lexstream::{Settings, SyntaxError, settings::Excerpt};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut group = super::configure(c, "report");

    let line = "\tlet value = compute(alpha, beta, gamma);\n";
    let raw = line.repeat(200);
    let offset = raw.chars().count() / 2 + 7;
    let root = SyntaxError::new("unexpected token", raw.as_str(), offset);

    group.bench_function("location", |b| {
        b.iter(|| black_box(black_box(&root).location()));
    });

    group.bench_function("pretty-print", |b| {
        b.iter(|| black_box(black_box(&root).pretty_print()));
    });

    let short = root.clone().with_excerpt(Excerpt {
        lines_before: Some(2),
        lines_after: Some(2),
        ..Default::default()
    });
    group.bench_function("pretty-print:truncated", |b| {
        b.iter(|| black_box(black_box(&short).pretty_print()));
    });

    let styled = root.clone().with_settings(&Settings::default());
    group.bench_function("pretty-print:styled", |b| {
        b.iter(|| black_box(black_box(&styled).pretty_print()));
    });

    group.bench_function("fork", |b| {
        b.iter(|| black_box(root.fork_at("other", black_box(12))));
    });

    group.finish();
}
