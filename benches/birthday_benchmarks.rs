//! Performance benchmarks for address book queries.
//!
//! These benchmarks measure:
//! - The upcoming-birthdays query over books of different sizes
//! - Fuzzy contact lookup by name and by phone

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactMatcher, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with birthdays spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact {}", i));
        record
            .add_phone(format!("{:010}", i))
            .expect("generated phone is valid");
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .add_birthday(format!("{:02}.{:02}.1990", day, month))
            .expect("generated birthday is valid");
        book.add_record(record);
    }
    book
}

/// Benchmark the upcoming-birthdays query at different book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays_from(black_box(today), black_box(7)));
        });
    }

    group.finish();
}

/// Benchmark fuzzy lookup by name and exact lookup by phone.
fn bench_find_matches(c: &mut Criterion) {
    let book = create_test_book(1_000);
    let matcher = ContactMatcher::new();

    c.bench_function("find_by_name", |b| {
        b.iter(|| matcher.find_matches(black_box("contact 42"), &book, 5, 30));
    });

    c.bench_function("find_by_phone", |b| {
        b.iter(|| matcher.find_matches(black_box("0000000042"), &book, 5, 30));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_find_matches);
criterion_main!(benches);
