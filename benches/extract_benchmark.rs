//! Benchmarks for unvocab extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test extraction at various input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unvocab::ExtractOptions;

/// Distinct alphabetic term for index `i` (entry terms are Latin-only).
fn term_for(mut i: usize) -> String {
    let mut s = String::new();
    loop {
        s.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    s
}

/// Builds synthetic numbered-entry text with the given entry count.
fn create_pdf_text(entries: usize) -> String {
    let mut text = String::new();
    for i in 0..entries {
        text.push_str(&format!(
            "{}. {} N. 단어의 뜻 풀이\t가산N. 다른 후보 뜻 ",
            i + 1,
            term_for(i)
        ));
    }
    text
}

/// Builds synthetic two-column CSV text with the given row count.
fn create_csv_text(rows: usize) -> String {
    let mut text = String::new();
    for i in 0..rows {
        text.push_str(&format!("{}-{},뜻풀이 단어 의미\n", term_for(i), i));
    }
    text
}

fn bench_pdf_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_extraction");

    for count in [100, 1000, 5000].iter() {
        let text = create_pdf_text(*count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("entries", count), &text, |b, text| {
            b.iter(|| {
                let _ = unvocab::pdf::extract_pdf_text(
                    black_box(text.as_str()),
                    &ExtractOptions::default(),
                );
            });
        });
    }

    group.finish();
}

fn bench_csv_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_extraction");

    for count in [100, 1000, 10000].iter() {
        let text = create_csv_text(*count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", count), &text, |b, text| {
            b.iter(|| {
                let _ = unvocab::csv::extract_csv(
                    black_box(text.as_str()),
                    &ExtractOptions::default(),
                );
            });
        });
    }

    group.finish();
}

fn bench_definition_cleaning(c: &mut Criterion) {
    let noisy = " scanner noise N. 2 page header\t가산N. 사과, 능금 (fruit) N. 다음 항목";

    c.bench_function("clean_definition", |b| {
        b.iter(|| unvocab::clean::clean_definition(black_box(noisy), 200));
    });
}

criterion_group!(
    benches,
    bench_csv_extraction,
    bench_pdf_extraction,
    bench_definition_cleaning,
);
criterion_main!(benches);
