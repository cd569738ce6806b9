//! Benchmarks for filtering and aggregation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog sized like the Kaggle Netflix dataset.

use catalog_loader::{explode, CatalogRow, ContentType, Duration, MultiField, Tokens};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{apply, count_by, stat_by, FilterCriteria, MissingKeys, Reducer};

const GENRES: &[&str] = &["Dramas", "Comedies", "Documentaries", "International Movies", "Thrillers"];
const COUNTRIES: &[&str] = &["United States", "India", "United Kingdom", "Japan", "South Korea"];
const RATINGS: &[&str] = &["TV-MA", "TV-14", "PG-13", "R", "PG"];

fn synthetic_rows(n: usize) -> Vec<CatalogRow> {
    (0..n)
        .map(|i| {
            let content_type = if i % 3 == 0 { ContentType::TvShow } else { ContentType::Movie };
            let mut row = CatalogRow::new(format!("s{}", i), format!("Title {}", i), content_type);
            row.release_year = Some(1950 + (i % 72) as i32);
            row.rating = Some(RATINGS[i % RATINGS.len()].to_string());
            row.genres = Tokens::parse(&format!(
                "{}, {}",
                GENRES[i % GENRES.len()],
                GENRES[(i / 7) % GENRES.len()]
            ));
            row.countries = Tokens::parse(COUNTRIES[i % COUNTRIES.len()]);
            row.duration = Some(match content_type {
                ContentType::Movie => Duration::Minutes(80 + (i % 60) as u32),
                ContentType::TvShow => Duration::Seasons(1 + (i % 5) as u32),
            });
            row
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let rows = synthetic_rows(8800);
    let criteria = FilterCriteria::new()
        .with_year_range(2010, 2021)
        .with_ratings(["TV-MA", "R"])
        .with_query("title 1");

    c.bench_function("filter_apply", |b| {
        b.iter(|| {
            let filtered = apply(black_box(&rows), black_box(&criteria));
            black_box(filtered)
        })
    });
}

fn bench_genre_counts(c: &mut Criterion) {
    let rows = synthetic_rows(8800);

    c.bench_function("explode_and_count_genres", |b| {
        b.iter(|| {
            let tokens = explode(black_box(&rows), MultiField::Genres);
            let counts = count_by(&tokens, |t| Some(t.value.to_string()), MissingKeys::Bucket);
            black_box(counts.top_n(15))
        })
    });
}

fn bench_duration_stats(c: &mut Criterion) {
    let rows = synthetic_rows(8800);

    c.bench_function("mean_minutes_by_year", |b| {
        b.iter(|| {
            let stats = stat_by(
                black_box(&rows).iter().filter(|r| r.is_movie()),
                |r| r.release_year,
                |r| r.duration_minutes().map(f64::from),
                Reducer::Mean,
                MissingKeys::Exclude,
            );
            black_box(stats)
        })
    });
}

criterion_group!(benches, bench_filter, bench_genre_counts, bench_duration_stats);
criterion_main!(benches);
