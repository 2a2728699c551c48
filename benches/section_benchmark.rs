//! Benchmarks for docsect segmentation and snippet performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic report pages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use docsect::{ExtractedDocument, PageRecord, SectionOptions, SectionPipeline, SnippetScorer};

/// Creates a synthetic page with the given number of header/body blocks.
fn create_test_page(page_number: u32, blocks: usize) -> PageRecord {
    let mut text = String::new();
    for i in 0..blocks {
        text.push_str(&format!("{}. Measured Block {}\n", i + 1, i));
        for _ in 0..4 {
            text.push_str(
                "the detector walked every line once and kept going. \
                 nothing on this line looks like a header to it.\n",
            );
        }
        text.push('\n');
    }
    PageRecord::new(page_number, text)
}

/// Benchmark input format detection.
fn bench_format_detection(c: &mut Criterion) {
    let json = br#"[{"page_number": 1, "text": "body"}]"#;
    let text = b"Plain text document content for detection";

    c.bench_function("detect_page_json", |b| {
        b.iter(|| docsect::detect_format_from_bytes(black_box(json)).unwrap());
    });

    c.bench_function("detect_plain_text", |b| {
        b.iter(|| docsect::detect_format_from_bytes(black_box(text)).unwrap());
    });
}

/// Benchmark segmentation at various page sizes.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    let pipeline = SectionPipeline::default();

    for blocks in [1, 10, 50].iter() {
        let page = create_test_page(1, *blocks);

        group.bench_function(format!("{}_blocks", blocks), |b| {
            b.iter(|| pipeline.process_page("bench.txt", black_box(&page)));
        });
    }

    group.finish();
}

/// Benchmark parallel against sequential processing of many documents.
fn bench_documents(c: &mut Criterion) {
    let docs: Vec<ExtractedDocument> = (0..32)
        .map(|i| ExtractedDocument {
            name: format!("doc{}.txt", i),
            pages: (1..=5).map(|p| create_test_page(p, 10)).collect(),
        })
        .collect();

    let parallel = SectionPipeline::default();
    let sequential = SectionPipeline::new(SectionOptions::new().sequential());

    c.bench_function("documents_parallel", |b| {
        b.iter(|| parallel.process_documents(black_box(&docs)));
    });

    c.bench_function("documents_sequential", |b| {
        b.iter(|| sequential.process_documents(black_box(&docs)));
    });
}

/// Benchmark snippet extraction.
fn bench_snippet(c: &mut Criterion) {
    let body = create_test_page(1, 20).text;
    let scorer = SnippetScorer::default();

    c.bench_function("snippet_extract", |b| {
        b.iter(|| scorer.extract(black_box(&body), black_box("detector header line")));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_segmentation,
    bench_documents,
    bench_snippet,
);
criterion_main!(benches);
