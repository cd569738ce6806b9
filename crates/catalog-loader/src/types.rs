//! Core domain types for the Netflix catalog.
//!
//! Every downstream component works on the fixed [`CatalogRow`] shape. Loosely
//! typed CSV cells are validated and coerced exactly once, in the parser.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub use crate::normalize::Tokens;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier of a title (`s1`, `s2`, ... in the Kaggle dataset)
pub type ShowId = String;

/// Label used for the explicit "missing value" bucket
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// Content type and duration
// =============================================================================

/// The two kinds of title in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    TvShow,
}

impl ContentType {
    /// Display label, matching the values used in the source data
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }

    /// Lenient parse of a `type` cell.
    ///
    /// Accepts "Movie" and "TV Show" in any case, plus the "TVShow" and "TV"
    /// spellings.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "movie" => Some(ContentType::Movie),
            "tvshow" | "tv" => Some(ContentType::TvShow),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running length of a title.
///
/// The unit is fixed by the content type: minutes for movies, seasons for
/// TV shows. Values of different units are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    Minutes(u32),
    Seasons(u32),
}

impl Duration {
    /// Minutes, if this is a movie duration
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Duration::Minutes(m) => Some(*m),
            Duration::Seasons(_) => None,
        }
    }

    /// Seasons, if this is a TV show duration
    pub fn seasons(&self) -> Option<u32> {
        match self {
            Duration::Seasons(s) => Some(*s),
            Duration::Minutes(_) => None,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Minutes(m) => write!(f, "{} min", m),
            Duration::Seasons(1) => write!(f, "1 Season"),
            Duration::Seasons(s) => write!(f, "{} Seasons", s),
        }
    }
}

// =============================================================================
// CatalogRow
// =============================================================================

/// One title in the catalog.
///
/// Multi-valued fields are never null: absent data is an empty [`Tokens`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub show_id: ShowId,
    pub title: String,
    pub content_type: ContentType,
    pub directors: Tokens,
    pub cast: Tokens,
    pub countries: Tokens,
    /// `None` when the cell was empty or not a recognised date
    pub date_added: Option<NaiveDate>,
    /// `None` when the cell was empty or not numeric
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: Option<Duration>,
    pub genres: Tokens,
    pub description: String,
}

impl CatalogRow {
    /// Create a row with the two required fields and empty defaults elsewhere.
    pub fn new(show_id: impl Into<ShowId>, title: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            show_id: show_id.into(),
            title: title.into(),
            content_type,
            directors: Tokens::default(),
            cast: Tokens::default(),
            countries: Tokens::default(),
            date_added: None,
            release_year: None,
            rating: None,
            duration: None,
            genres: Tokens::default(),
            description: String::new(),
        }
    }

    pub fn is_movie(&self) -> bool {
        self.content_type == ContentType::Movie
    }

    pub fn is_tv_show(&self) -> bool {
        self.content_type == ContentType::TvShow
    }

    pub fn year_added(&self) -> Option<i32> {
        self.date_added.map(|d| d.year())
    }

    /// Month added, 1 through 12
    pub fn month_added(&self) -> Option<u32> {
        self.date_added.map(|d| d.month())
    }

    /// Decade of release, e.g. 2019 -> 2010. `None` when the decade is not
    /// representable.
    pub fn decade(&self) -> Option<i32> {
        self.release_year
            .and_then(|y| y.div_euclid(10).checked_mul(10))
    }

    /// Rating, or the "Unknown" label when the row has none
    pub fn rating_label(&self) -> &str {
        self.rating.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration.and_then(|d| d.minutes())
    }

    pub fn duration_seasons(&self) -> Option<u32> {
        self.duration.and_then(|d| d.seasons())
    }
}

// =============================================================================
// Catalog - the loaded, read-only table
// =============================================================================

/// Bookkeeping gathered while loading a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Data records read from the source (excluding the header)
    pub records_read: usize,
    /// Rows dropped because their identifier was already seen
    pub duplicate_rows: usize,
    /// Rows dropped because their type was neither Movie nor TV Show
    pub skipped_rows: usize,
    /// Rows kept with an unknown `date_added`
    pub undated_rows: usize,
}

/// The loaded catalog.
///
/// Built once and treated as read-only afterwards; share it as
/// `Arc<Catalog>`.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Rows in source order
    pub(crate) rows: Vec<CatalogRow>,
    /// Position of each row in `rows`
    pub(crate) by_id: HashMap<ShowId, usize>,
    pub(crate) source: Option<PathBuf>,
    pub(crate) summary: LoadSummary,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Get a row by identifier
    pub fn get(&self, show_id: &str) -> Option<&CatalogRow> {
        self.by_id.get(show_id).map(|&idx| &self.rows[idx])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Path the catalog was loaded from, if it came from a file
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    /// Insert a row, keeping the first occurrence of each identifier.
    ///
    /// Returns `false` when the identifier was already present.
    pub fn insert_row(&mut self, row: CatalogRow) -> bool {
        if self.by_id.contains_key(&row.show_id) {
            return false;
        }
        self.by_id.insert(row.show_id.clone(), self.rows.len());
        self.rows.push(row);
        true
    }

    /// Get (movies, tv shows) counts
    pub fn counts(&self) -> (usize, usize) {
        let movies = self.rows.iter().filter(|r| r.is_movie()).count();
        (movies, self.rows.len() - movies)
    }
}
