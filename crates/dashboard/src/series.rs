//! Table and series shapes handed to the presentation layer.
//!
//! Every view output is built from these types. Column names and sort orders
//! are fixed here so renderers never re-sort.

use pipeline::{AggregationResult, Bucket};
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;

/// One row of a [`CountTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub category: String,
    pub count: usize,
}

/// A labelled table of category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountTable {
    pub label: String,
    pub rows: Vec<CountEntry>,
}

impl CountTable {
    pub fn new(label: impl Into<String>, rows: Vec<CountEntry>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }

    /// Largest counts first, ties by category name.
    pub fn sorted<K>(label: impl Into<String>, counts: &AggregationResult<K, usize>) -> Self
    where
        K: Eq + Hash + Ord + Clone + Display,
    {
        Self::new(label, to_entries(counts.sorted_desc()))
    }

    /// Same order as [`sorted`](Self::sorted), truncated to `limit`.
    pub fn top<K>(label: impl Into<String>, counts: &AggregationResult<K, usize>, limit: usize) -> Self
    where
        K: Eq + Hash + Ord + Clone + Display,
    {
        Self::new(label, to_entries(counts.top_n(limit)))
    }

    /// Ascending by key, `Unknown` last.
    pub fn by_key<K>(label: impl Into<String>, counts: &AggregationResult<K, usize>) -> Self
    where
        K: Eq + Hash + Ord + Clone + Display,
    {
        Self::new(label, to_entries(counts.sorted_by_key()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count for `category`, if present
    pub fn get(&self, category: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|e| e.category.as_str())
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|e| e.count).sum()
    }
}

fn to_entries<K: Display>(buckets: Vec<(Bucket<K>, usize)>) -> Vec<CountEntry> {
    buckets
        .into_iter()
        .map(|(bucket, count)| CountEntry {
            category: bucket.to_string(),
            count,
        })
        .collect()
}

/// One point of a [`YearSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub value: f64,
}

/// Values keyed by year, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSeries {
    pub label: String,
    pub points: Vec<YearPoint>,
}

impl YearSeries {
    /// Counts keyed by year. The `Unknown` bucket has no year and is dropped.
    pub fn from_counts(label: impl Into<String>, counts: &AggregationResult<i32, usize>) -> Self {
        Self::from_buckets(
            label,
            counts
                .sorted_by_key()
                .into_iter()
                .map(|(bucket, count)| (bucket, count as f64)),
        )
    }

    pub fn from_stats(label: impl Into<String>, stats: &AggregationResult<i32, f64>) -> Self {
        Self::from_buckets(label, stats.sorted_by_key())
    }

    fn from_buckets(
        label: impl Into<String>,
        buckets: impl IntoIterator<Item = (Bucket<i32>, f64)>,
    ) -> Self {
        let points = buckets
            .into_iter()
            .filter_map(|(bucket, value)| bucket.key().map(|&year| YearPoint { year, value }))
            .collect();
        Self {
            label: label.into(),
            points,
        }
    }

    /// Keep only points from `year` on
    pub fn since(mut self, year: i32) -> Self {
        self.points.retain(|p| p.year >= year);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.value)
    }
}

/// One country of a [`GeoSeries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoPoint {
    pub country: String,
    pub count: usize,
}

/// Counts keyed by country name, for map widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeoSeries {
    pub points: Vec<GeoPoint>,
}

impl From<&CountTable> for GeoSeries {
    fn from(table: &CountTable) -> Self {
        Self {
            points: table
                .rows
                .iter()
                .map(|e| GeoPoint {
                    country: e.category.clone(),
                    count: e.count,
                })
                .collect(),
        }
    }
}

/// Cell of the decade × content type crosstab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeTypeCell {
    pub decade: i32,
    pub content_type: String,
    pub count: usize,
}

/// Number of titles in one genre for one release year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTrendPoint {
    pub year: i32,
    pub genre: String,
    pub count: usize,
}

/// Titles added in one month of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::{count_by, stat_by, MissingKeys, Reducer};

    #[test]
    fn test_top_sorts_by_count_then_name() {
        let words = ["TV-MA", "R", "PG", "R", "TV-MA", "G"];
        let counts = count_by(words, |w| Some(w.to_string()), MissingKeys::Bucket);

        let table = CountTable::top("Rating", &counts, 3);
        let categories: Vec<&str> = table.categories().collect();
        assert_eq!(categories, vec!["R", "TV-MA", "G"]);
        assert_eq!(table.get("R"), Some(2));
        assert_eq!(table.get("PG"), None);
    }

    #[test]
    fn test_by_key_places_unknown_last() {
        let years = [Some(2001), None, Some(1999), Some(2001)];
        let counts = count_by(years, |y| *y, MissingKeys::Bucket);

        let table = CountTable::by_key("Year", &counts);
        let categories: Vec<&str> = table.categories().collect();
        assert_eq!(categories, vec!["1999", "2001", "Unknown"]);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_year_series_drops_unknown_and_filters_start() {
        let years = [Some(1985), Some(1995), None, Some(2005), Some(1995)];
        let counts = count_by(years, |y| *y, MissingKeys::Bucket);

        let series = YearSeries::from_counts("Releases", &counts).since(1990);
        assert_eq!(series.len(), 2);
        assert_eq!(series.value_at(1995), Some(2.0));
        assert_eq!(series.value_at(1985), None);
    }

    #[test]
    fn test_year_series_from_stats() {
        let items = [(2020, 90.0), (2020, 110.0), (2021, 60.0)];
        let stats = stat_by(items, |(y, _)| Some(*y), |(_, v)| Some(*v), Reducer::Mean, MissingKeys::Exclude);

        let series = YearSeries::from_stats("Minutes", &stats);
        assert_eq!(series.points[0], YearPoint { year: 2020, value: 100.0 });
        assert_eq!(series.points[1], YearPoint { year: 2021, value: 60.0 });
    }

    #[test]
    fn test_geo_series_from_table() {
        let table = CountTable::new(
            "Country",
            vec![CountEntry {
                category: "India".to_string(),
                count: 4,
            }],
        );
        let geo = GeoSeries::from(&table);
        assert_eq!(geo.points[0].country, "India");
        assert_eq!(geo.points[0].count, 4);
    }
}
