//! # Dashboard
//!
//! Entry point of the view layer. A [`Dashboard`] owns a shared, read-only
//! catalog plus the view limits. Every view call:
//! 1. Applies the caller's criteria to the catalog
//! 2. Groups, counts or reduces the surviving rows
//! 3. Shapes the result into fixed tables and series
//!
//! Nothing is cached between calls; each interaction recomputes from the
//! in-memory rows.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use catalog_loader::{distinct_tokens, Catalog, CatalogRow, MultiField};
use pipeline::{apply, count_by, FilterCriteria, MissingKeys};

use crate::settings::DashboardSettings;
use crate::warning::{warning_for, EmptyResultWarning};

/// Assembles per-tab views from the catalog
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Arc<Catalog>,
    settings: DashboardSettings,
}

/// Headline metrics shown above every tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
    /// `None` when no matching title has a release year
    pub earliest_release_year: Option<i32>,
    pub latest_release_year: Option<i32>,
    /// Distinct country tokens across the matching titles
    pub unique_countries: usize,
    pub unique_directors: usize,
    /// Ties go to the alphabetically first rating; unrated titles are ignored
    pub most_common_rating: Option<String>,
}

impl Summary {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("summary", self.total)
    }
}

/// Choices offered by the filter controls, taken from the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub content_types: Vec<String>,
    /// Includes "Unknown" when some titles are unrated
    pub ratings: Vec<String>,
    pub countries: Vec<String>,
    pub genres: Vec<String>,
    /// Bounds of the year-range slider
    pub release_years: Option<(i32, i32)>,
}

impl Dashboard {
    pub fn new(catalog: Arc<Catalog>, settings: DashboardSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Rows matching `criteria`, in catalog order.
    pub(crate) fn filtered(&self, view: &str, criteria: &FilterCriteria) -> Vec<&CatalogRow> {
        let start = Instant::now();
        let rows = apply(self.catalog.rows(), criteria);
        debug!(
            "{} view: {} of {} titles match ({:.2?})",
            view,
            rows.len(),
            self.catalog.len(),
            start.elapsed()
        );
        if rows.is_empty() {
            warn!("{} view: no titles match the current filters", view);
        }
        rows
    }

    /// Resolve a token's row back-reference
    pub(crate) fn row(&self, show_id: &str) -> Option<&CatalogRow> {
        self.catalog.get(show_id)
    }

    /// Distinct values of `field` across the whole catalog, sorted
    pub fn options(&self, field: MultiField) -> Vec<String> {
        distinct_tokens(self.catalog.rows(), field)
    }

    pub fn filter_options(&self) -> FilterOptions {
        let rows = self.catalog.rows();
        let content_types: BTreeSet<_> = rows.iter().map(|r| r.content_type).collect();
        let ratings: BTreeSet<&str> = rows.iter().map(|r| r.rating_label()).collect();
        let years = rows.iter().filter_map(|r| r.release_year);

        FilterOptions {
            content_types: content_types.iter().map(|t| t.label().to_string()).collect(),
            ratings: ratings.into_iter().map(str::to_string).collect(),
            countries: self.options(MultiField::Countries),
            genres: self.options(MultiField::Genres),
            release_years: years.clone().min().zip(years.max()),
        }
    }

    /// Headline metrics for the filtered catalog
    pub fn summary(&self, criteria: &FilterCriteria) -> Summary {
        let rows = self.filtered("summary", criteria);
        let movies = rows.iter().filter(|r| r.is_movie()).count();
        let years = rows.iter().filter_map(|r| r.release_year);
        let most_common_rating = count_by(&rows, |r| r.rating.clone(), MissingKeys::Exclude)
            .top_n(1)
            .into_iter()
            .find_map(|(bucket, _)| bucket.key().cloned());

        Summary {
            total: rows.len(),
            movies,
            tv_shows: rows.len() - movies,
            earliest_release_year: years.clone().min(),
            latest_release_year: years.max(),
            unique_countries: distinct_tokens(rows.iter().copied(), MultiField::Countries).len(),
            unique_directors: distinct_tokens(rows.iter().copied(), MultiField::Directors).len(),
            most_common_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_loader::ContentType;

    fn create_test_dashboard() -> Dashboard {
        let mut catalog = Catalog::new();
        for (id, content_type, year) in [
            ("s1", ContentType::Movie, Some(2019)),
            ("s2", ContentType::TvShow, Some(2021)),
            ("s3", ContentType::Movie, None),
        ] {
            let mut row = CatalogRow::new(id, id, content_type);
            row.release_year = year;
            catalog.insert_row(row);
        }
        Dashboard::new(Arc::new(catalog), DashboardSettings::default())
    }

    #[test]
    fn test_summary_counts() {
        let dashboard = create_test_dashboard();
        let summary = dashboard.summary(&FilterCriteria::new());

        assert_eq!(summary.total, 3);
        assert_eq!(summary.movies, 2);
        assert_eq!(summary.tv_shows, 1);
        assert_eq!(summary.earliest_release_year, Some(2019));
        assert_eq!(summary.latest_release_year, Some(2021));
        assert_eq!(summary.most_common_rating, None);
        assert!(summary.warning().is_none());
    }

    #[test]
    fn test_summary_of_empty_selection() {
        let dashboard = create_test_dashboard();
        let criteria = FilterCriteria::new().with_year_range(1950, 1960);
        let summary = dashboard.summary(&criteria);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.latest_release_year, None);
        assert_eq!(summary.unique_countries, 0);
        assert!(summary.warning().is_some());
    }

    #[test]
    fn test_filter_options() {
        let dashboard = create_test_dashboard();
        let options = dashboard.filter_options();

        assert_eq!(options.content_types, vec!["Movie", "TV Show"]);
        assert_eq!(options.ratings, vec!["Unknown"]);
        assert_eq!(options.release_years, Some((2019, 2021)));
        assert!(options.genres.is_empty());
    }

    #[test]
    fn test_most_common_rating_tie_breaks_by_name() {
        let mut catalog = Catalog::new();
        for (id, rating) in [("s1", Some("TV-MA")), ("s2", Some("PG")), ("s3", None), ("s4", None)] {
            let mut row = CatalogRow::new(id, id, ContentType::Movie);
            row.rating = rating.map(str::to_string);
            catalog.insert_row(row);
        }
        let dashboard = Dashboard::new(Arc::new(catalog), DashboardSettings::default());

        let summary = dashboard.summary(&FilterCriteria::new());
        assert_eq!(summary.most_common_rating.as_deref(), Some("PG"));
    }
}
