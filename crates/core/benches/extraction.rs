use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use clearread_core::{Document, ExtractConfig, LocateStrategy, extract, parse, segment_blocks};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

/// A page with `n` nested wrapper sections around a run of plain divs, so the
/// largest-block scan has many overlapping candidates.
fn div_heavy_page(n: usize) -> String {
    let mut html = String::from("<html><head><title>Generated</title></head><body>");
    for i in 0..n {
        html.push_str(&format!("<section class=\"wrap-{i}\">"));
    }
    for i in 0..n {
        html.push_str(&format!(
            "<div>Paragraph {i} of generated filler text. It keeps going long enough to count as a block.</div>"
        ));
    }
    for _ in 0..n {
        html.push_str("</section>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let small = fixture("sparse_article.html");
    let medium = fixture("semantic_article.html");
    let large = div_heavy_page(200);

    let mut group = c.benchmark_group("parse");

    group.bench_with_input(BenchmarkId::new("small", "sparse"), &small, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("medium", "article"), &medium, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("large", "generated"), &large, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.finish();
}

fn bench_full_extraction(c: &mut Criterion) {
    let html = fixture("semantic_article.html");

    c.bench_function("full_extraction", |b| b.iter(|| parse(black_box(&html))));
}

fn bench_largest_text_block(c: &mut Criterion) {
    let config = ExtractConfig::default();
    let mut group = c.benchmark_group("largest_text_block");

    for n in [25, 100, 200] {
        let doc = Document::parse(&div_heavy_page(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &doc, |b, doc| {
            b.iter(|| LocateStrategy::LargestTextBlock.locate(black_box(doc), &config))
        });
    }

    group.finish();
}

fn bench_segmentation(c: &mut Criterion) {
    let doc = Document::parse(&fixture("semantic_article.html")).unwrap();
    let config = ExtractConfig::default();
    let article = doc.select_first("article").unwrap().unwrap();

    c.bench_function("segmentation", |b| {
        b.iter(|| segment_blocks(black_box(&article), black_box(&config)))
    });

    c.bench_function("extract_parsed", |b| b.iter(|| extract(black_box(&doc))));
}

criterion_group!(
    benches,
    bench_parse,
    bench_full_extraction,
    bench_largest_text_block,
    bench_segmentation
);
criterion_main!(benches);
