//! Benchmarks for repaginate pagination performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks paginate synthetic documents against the monospace
//! oracle, so they measure the engine and not a renderer.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use repaginate::layout::LayoutOracle;
use repaginate::paginate::find_split_offset;
use repaginate::{Block, Document, MonospaceOracle, NodeRef, OpaqueKind, Page, Paginator, Track};

/// Creates a document whose content pages each hold about `fill` pages of
/// mixed content.
fn create_test_document(page_count: usize, fill: usize) -> Document {
    let mut doc = Document::new();
    doc.add_page(Page::cover("Cover"));
    for i in 0..page_count {
        let mut blocks = Vec::new();
        for j in 0..fill {
            blocks.push(Block::paragraph(
                format!("Page {} section {} benchmark text for pagination. ", i, j).repeat(40),
            ));
            blocks.push(Block::bullets((1..=6).map(|k| format!("Item {}", k))));
            blocks.push(Block::opaque(OpaqueKind::Table, 180.0, "figures"));
        }
        doc.add_page(Page::generic(blocks));
    }
    doc
}

/// Benchmark the text segmenter on one long paragraph.
fn bench_split_offset(c: &mut Criterion) {
    let mut doc = Document::new();
    doc.add_page(Page::generic(vec![Block::paragraph("lorem ipsum ".repeat(2000))]));
    let oracle = MonospaceOracle::default();
    let node = NodeRef::block(0, Track::Main, 0);

    c.bench_function("find_split_offset", |b| {
        b.iter(|| find_split_offset(black_box(&doc), node, 960.0, &oracle));
    });

    c.bench_function("node_rect", |b| {
        b.iter(|| oracle.node_rect(black_box(&doc), node).unwrap());
    });
}

/// Benchmark whole passes at various sizes.
fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");
    let paginator = Paginator::new().with_max_iterations(500);

    for page_count in [1, 5, 10].iter() {
        let doc = create_test_document(*page_count, 3);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter_batched(
                || doc.clone(),
                |mut doc| paginator.run(&mut doc).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = Paginator::new()
                .with_content_limit(black_box(900.0))
                .with_max_iterations(100);
        });
    });
}

criterion_group!(
    benches,
    bench_split_offset,
    bench_pagination,
    bench_builder_creation,
);
criterion_main!(benches);
