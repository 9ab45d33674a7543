//! Performance benchmarks for the contact directory.
//!
//! These benchmarks measure:
//! - Page iteration over directories of different sizes
//! - Fuzzy search by name
//! - Next-birthday arithmetic across the whole directory

use chrono::NaiveDate;
use contact_book::ContactDirectory;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a directory of `size` contacts, each with a phone and a birthday.
fn create_directory(size: usize) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for i in 0..size {
        let phone = format!("{:010}", i);
        let birthday = format!("19{:02}-{:02}-{:02}", i % 100, i % 12 + 1, i % 28 + 1);
        directory
            .add_record(&format!("Contact {}", i), [phone.as_str()], Some(&birthday))
            .expect("benchmark record is valid");
    }
    directory
}

/// Benchmark paging through the full directory.
fn bench_iter_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_pages");

    for size in [100, 1_000, 10_000] {
        let directory = create_directory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &directory, |b, directory| {
            b.iter(|| {
                let pages = directory.iter_pages(black_box(20)).unwrap();
                pages.map(|page| page.len()).sum::<usize>()
            });
        });
    }

    group.finish();
}

/// Benchmark fuzzy name search.
fn bench_search(c: &mut Criterion) {
    let directory = create_directory(1_000);

    c.bench_function("search_by_name", |b| {
        b.iter(|| directory.search(black_box("contact 42"), 5));
    });

    c.bench_function("search_by_phone", |b| {
        b.iter(|| directory.search(black_box("0000000042"), 5));
    });
}

/// Benchmark days-to-birthday over every contact.
fn bench_days_to_birthday(c: &mut Criterion) {
    let directory = create_directory(1_000);
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");

    c.bench_function("days_to_birthday_all", |b| {
        b.iter(|| {
            directory
                .iter()
                .filter_map(|contact| contact.days_to_birthday(black_box(today)))
                .sum::<i64>()
        });
    });
}

criterion_group!(
    benches,
    bench_iter_pages,
    bench_search,
    bench_days_to_birthday
);
criterion_main!(benches);
