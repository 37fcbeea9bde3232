//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure:
//! - Exact lookup by name at different book sizes
//! - Fuzzy name search at different book sizes
//! - Rendering the whole book

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` records, each with two phones.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact {}", i)).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            record.add_phone(format!("{:010}", i + 1_000_000)).unwrap();
            record
        })
        .collect()
}

/// Benchmark exact lookup by name.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [10, 100, 1_000, 10_000].iter() {
        let book = create_test_book(*size);
        let target = format!("Contact {}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| book.find(black_box(&target)));
        });
    }

    group.finish();
}

/// Benchmark fuzzy name search.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1_000].iter() {
        let book = create_test_book(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| book.search(black_box("contact 5"), 10, 30));
        });
    }

    group.finish();
}

/// Benchmark rendering the whole book.
fn bench_render(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("render_1000", |b| {
        b.iter(|| black_box(&book).to_string());
    });
}

criterion_group!(benches, bench_find, bench_search, bench_render);
criterion_main!(benches);
