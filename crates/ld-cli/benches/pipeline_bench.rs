//! Rewriter throughput on generated box diagrams.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ld_core::FenceConfig;
use ld_render_text::{process, process_with_stats, render_fenced};

/// A `cols` x `rows` lattice of boxes joined by strokes.
fn lattice(cols: usize, rows: usize) -> String {
    let border = format!("+{}", "-----+".repeat(cols));
    let body = format!("|{}", "     |".repeat(cols));
    let mut lines = vec![border.clone()];
    for _ in 0..rows {
        lines.push(body.clone());
        lines.push(body.clone());
        lines.push(border.clone());
    }
    lines.join("\n")
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    for size in [4_usize, 16, 64] {
        let art = lattice(size, size);
        group.throughput(Throughput::Bytes(art.len() as u64));
        group.bench_with_input(BenchmarkId::new("lattice", size), &art, |b, art| {
            b.iter(|| process(black_box(art)));
        });
        group.bench_with_input(BenchmarkId::new("lattice_stats", size), &art, |b, art| {
            b.iter(|| process_with_stats(black_box(art)));
        });
    }
    group.finish();
}

fn bench_fenced(c: &mut Criterion) {
    let art = lattice(8, 8);
    let doc = (0..16)
        .map(|i| format!("## Section {i}\n\nSome prose - with + signs.\n\n```ascii-art\n{art}\n```\n"))
        .collect::<String>();
    let config = FenceConfig::default();

    c.bench_function("fenced/16_blocks", |b| {
        b.iter(|| render_fenced(black_box(&doc), &config));
    });
}

criterion_group!(benches, bench_process, bench_fenced);
criterion_main!(benches);
