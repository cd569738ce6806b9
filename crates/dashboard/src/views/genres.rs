//! Genres & Categories tab.

use std::collections::HashSet;

use catalog_loader::{explode, CatalogRow, MultiField};
use pipeline::{count_by, count_distinct_by, FilterCriteria, MissingKeys};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::series::{CountTable, GenreTrendPoint};
use crate::warning::{warning_for, EmptyResultWarning};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenresView {
    pub matched: usize,
    pub genres: CountTable,
    /// Per release year counts of the leading genres, ascending by year
    pub genre_trends: Vec<GenreTrendPoint>,
    pub directors: CountTable,
    pub cast: CountTable,
}

impl GenresView {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("genres", self.matched)
    }
}

impl Dashboard {
    pub fn genres(&self, criteria: &FilterCriteria) -> GenresView {
        let settings = self.settings();
        let rows = self.filtered("genres", criteria);

        let genre_tokens = explode(rows.iter().copied(), MultiField::Genres);
        let genre_counts = count_by(&genre_tokens, |t| Some(t.value), MissingKeys::Exclude);
        let genres = CountTable::top("Genre", &genre_counts, settings.top_genres);

        let leading: HashSet<&str> = genres
            .categories()
            .take(settings.trend_genres)
            .collect();
        let genre_trends = count_by(
            genre_tokens.iter().filter(|t| leading.contains(t.value)),
            |t| {
                self.row(t.row_id)
                    .and_then(|r| r.release_year)
                    .map(|year| (year, t.value))
            },
            MissingKeys::Exclude,
        )
        .sorted_by_key()
        .into_iter()
        .filter_map(|(bucket, count)| {
            bucket.key().map(|&(year, genre)| GenreTrendPoint {
                year,
                genre: genre.to_string(),
                count,
            })
        })
        .collect();

        GenresView {
            matched: rows.len(),
            genres,
            genre_trends,
            directors: top_people(&rows, MultiField::Directors, "Director", settings.top_people),
            cast: top_people(&rows, MultiField::Cast, "Cast Member", settings.top_people),
        }
    }
}

/// Most credited people in `field`. A name repeated within one title's
/// credits counts once for that title.
fn top_people(rows: &[&CatalogRow], field: MultiField, label: &str, limit: usize) -> CountTable {
    let tokens = explode(rows.iter().copied(), field);
    let counts = count_distinct_by(
        &tokens,
        |t| Some(t.value),
        |t| t.row_id,
        MissingKeys::Exclude,
    );
    CountTable::top(label, &counts, limit)
}
