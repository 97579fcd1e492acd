//! Benchmarks for list sorting
//!
//! Run with: cargo bench --package listing
//!
//! Sorts a synthetic library of 10 000 movies by a textual and a numeric
//! field, sequentially and on the rayon pool.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use library::Movie;
use listing::{SortComparator, SortDirection, SortField, TitleCollator};
use std::sync::Arc;

const WORDS: &[&str] = &[
    "The", "Last", "Émigré", "Night", "of", "Zorro", "Äpfel", "Return", "Dark", "Ølstykke",
];

fn synthetic_library(size: u32) -> Vec<Movie> {
    (0..size)
        .map(|i| {
            let title = format!(
                "{} {} {}",
                WORDS[(i % 10) as usize],
                WORDS[((i / 10) % 10) as usize],
                i
            );
            let mut movie = Movie::new(i, title);
            if i % 13 != 0 {
                movie.year = Some((1920 + i % 100).to_string());
            }
            movie.runtime = Some(80 + i % 90);
            movie
        })
        .collect()
}

fn bench_sort_by_title(c: &mut Criterion) {
    let collator = Arc::new(TitleCollator::new("en").expect("Failed to build collator"));
    let comparator = SortComparator::new(SortField::Title, SortDirection::Ascending, collator);
    let movies = synthetic_library(10_000);

    c.bench_function("sort_title_10k", |b| {
        b.iter(|| black_box(comparator.sorted(black_box(movies.clone()))))
    });

    c.bench_function("par_sort_title_10k", |b| {
        b.iter(|| black_box(comparator.par_sorted(black_box(movies.clone()))))
    });
}

fn bench_sort_by_year(c: &mut Criterion) {
    let collator = Arc::new(TitleCollator::root().expect("Failed to build collator"));
    let comparator = SortComparator::new(SortField::Year, SortDirection::Descending, collator);
    let movies = synthetic_library(10_000);

    c.bench_function("sort_year_10k", |b| {
        b.iter(|| black_box(comparator.sorted(black_box(movies.clone()))))
    });
}

fn bench_pairwise_compare(c: &mut Criterion) {
    let collator = Arc::new(TitleCollator::new("de").expect("Failed to build collator"));
    let comparator = SortComparator::new(SortField::SortTitle, SortDirection::Ascending, collator);
    let a = Movie::new(1, "Die Ärzte");
    let b = Movie::new(2, "Der Name der Rose");

    c.bench_function("compare_sort_title", |bench| {
        bench.iter(|| black_box(comparator.compare(black_box(&a), black_box(&b))))
    });
}

criterion_group!(benches, bench_sort_by_title, bench_sort_by_year, bench_pairwise_compare);
criterion_main!(benches);
