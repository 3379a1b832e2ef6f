//! Benchmarks for cdn-rewrite.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - Single URL rewriting (rewritten vs. passed through)
//! - HTML content rewriting at different page sizes
//! - URI pattern compilation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cdn_rewrite::{compile_glob_set, CdnOptions, CdnRewriter, Environment};

fn rewriter() -> CdnRewriter {
    let options = CdnOptions {
        cdn_enable: true,
        cdn_host: "cdn.example.com".to_string(),
        cdn_invalidation_var: "v".to_string(),
        cdn_invalidation_counter: 42,
        cdn_blacklisted_uri_patterns: "/wp-content/uploads/private/*\n*/cache/^/*.css".to_string(),
        ..Default::default()
    };
    CdnRewriter::from_options(&options, &Environment::new("example.com"))
}

/// Generate an HTML page with `count` asset references, half of them local.
fn generate_page(count: usize) -> String {
    let mut html = String::from("<html><head><title>bench</title></head><body>\n");
    for i in 0..count {
        match i % 4 {
            0 => html.push_str(&format!(
                "<img src=\"http://example.com/wp-content/uploads/{}.jpg\" alt=\"{}\">\n",
                i, i
            )),
            1 => html.push_str(&format!(
                "<a href=\"http://other.com/page/{}/\">link {}</a>\n",
                i, i
            )),
            2 => html.push_str(&format!(
                "<link rel='stylesheet' href='/wp-content/themes/t/{}.css?ver=1' />\n",
                i
            )),
            _ => html.push_str(&format!("<p>paragraph {} with no assets</p>\n", i)),
        }
    }
    html.push_str("</body></html>\n");
    html
}

fn bench_rewrite_url(c: &mut Criterion) {
    let rewriter = rewriter();
    let mut group = c.benchmark_group("rewrite_url");

    group.bench_function("local_file", |b| {
        b.iter(|| rewriter.rewrite_url(black_box("http://example.com/wp-content/a.jpg"), None))
    });
    group.bench_function("foreign_host", |b| {
        b.iter(|| rewriter.rewrite_url(black_box("http://other.com/wp-content/a.jpg"), None))
    });
    group.bench_function("blacklisted", |b| {
        b.iter(|| rewriter.rewrite_url(black_box("/wp-content/uploads/private/a.jpg"), None))
    });

    group.finish();
}

fn bench_rewrite_content(c: &mut Criterion) {
    let rewriter = rewriter();
    let mut group = c.benchmark_group("rewrite_content");

    for count in [10, 100, 1000] {
        let page = generate_page(count);
        group.throughput(Throughput::Bytes(page.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &page, |b, page| {
            b.iter(|| rewriter.rewrite_content(black_box(page)))
        });
    }

    group.finish();
}

fn bench_compile_globs(c: &mut Criterion) {
    let patterns: Vec<String> = (0..50).map(|i| format!("/section{}/^/*.css", i)).collect();
    c.bench_function("compile_glob_set_50", |b| {
        b.iter(|| compile_glob_set(black_box(&patterns)))
    });
}

criterion_group!(
    benches,
    bench_rewrite_url,
    bench_rewrite_content,
    bench_compile_globs
);
criterion_main!(benches);
