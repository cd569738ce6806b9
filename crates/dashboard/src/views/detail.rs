//! Detailed Analysis tab: the searchable title table.

use catalog_loader::{CatalogRow, MultiField};
use pipeline::{reduce, FilterCriteria, Reducer};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::warning::{warning_for, EmptyResultWarning};

/// Cast lists longer than this are cut for display
const CAST_DISPLAY_CHARS: usize = 200;

/// One title as shown in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    pub show_id: String,
    pub title: String,
    pub content_type: String,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration: Option<String>,
    /// `YYYY-MM-DD`
    pub date_added: Option<String>,
    pub countries: String,
    pub directors: String,
    pub cast: String,
    pub genres: String,
    pub description: String,
}

impl From<&CatalogRow> for DetailRecord {
    fn from(row: &CatalogRow) -> Self {
        Self {
            show_id: row.show_id.clone(),
            title: row.title.clone(),
            content_type: row.content_type.label().to_string(),
            release_year: row.release_year,
            rating: row.rating_label().to_string(),
            duration: row.duration.map(|d| d.to_string()),
            date_added: row.date_added.map(|d| d.format("%Y-%m-%d").to_string()),
            countries: row.countries.to_string(),
            directors: row.directors.to_string(),
            cast: truncate_chars(&row.cast.to_string(), CAST_DISPLAY_CHARS),
            genres: row.genres.to_string(),
            description: row.description.clone(),
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Statistics over every matching title, not just the displayed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailStats {
    pub count: usize,
    /// Truncated mean; `None` when no matching title has a release year
    pub mean_release_year: Option<i32>,
    pub movies: usize,
    pub tv_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub criteria: FilterCriteria,
    pub stats: DetailStats,
    /// The first `limit` matching titles, in catalog order
    pub records: Vec<DetailRecord>,
    /// Genre choices for the selector, from the whole catalog
    pub genre_options: Vec<String>,
    pub country_options: Vec<String>,
}

impl DetailView {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("detail", self.stats.count)
    }
}

impl Dashboard {
    pub fn detail(&self, criteria: &FilterCriteria, limit: usize) -> DetailView {
        let rows = self.filtered("detail", criteria);

        let years: Vec<f64> = rows
            .iter()
            .filter_map(|r| r.release_year)
            .map(f64::from)
            .collect();
        let movies = rows.iter().filter(|r| r.is_movie()).count();

        DetailView {
            criteria: criteria.clone(),
            stats: DetailStats {
                count: rows.len(),
                mean_release_year: reduce(&years, Reducer::Mean).map(|m| m.trunc() as i32),
                movies,
                tv_shows: rows.len() - movies,
            },
            records: rows.iter().take(limit).map(|&r| DetailRecord::from(r)).collect(),
            genre_options: self.options(MultiField::Genres),
            country_options: self.options(MultiField::Countries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_loader::{ContentType, Duration, Tokens};

    #[test]
    fn test_detail_record_from_row() {
        let mut row = CatalogRow::new("s7", "My Little Pony", ContentType::Movie);
        row.duration = Some(Duration::Minutes(91));
        row.countries = Tokens::parse("United States, Canada");

        let record = DetailRecord::from(&row);
        assert_eq!(record.content_type, "Movie");
        assert_eq!(record.duration.as_deref(), Some("91 min"));
        assert_eq!(record.rating, "Unknown");
        assert_eq!(record.countries, "United States, Canada");
        assert_eq!(record.date_added, None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("éééé", 2), "éé...");
    }
}
