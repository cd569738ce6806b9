//! User-selected filter criteria.
//!
//! A [`FilterCriteria`] is built fresh for every interaction and passed
//! explicitly into the pipeline. There is no process-wide "current filter".

use catalog_loader::ContentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive range of release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Bounds given in the wrong order are swapped.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Optional predicates narrowing the row set.
///
/// Every field is optional and an unset field matches everything. Sets and
/// queries that are empty count as unset, so the default value is the
/// identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    content_type: Option<ContentType>,
    ratings: BTreeSet<String>,
    countries: BTreeSet<String>,
    genre: Option<String>,
    year_range: Option<YearRange>,
    query: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every row
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_ratings<I, S>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ratings = clean_set(ratings);
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = clean_set(countries);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = non_blank(genre.into());
        self
    }

    pub fn with_year_range(mut self, start: i32, end: i32) -> Self {
        self.year_range = Some(YearRange::new(start, end));
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = non_blank(query.into());
        self
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    /// Selected ratings, `None` when unrestricted
    pub fn ratings(&self) -> Option<&BTreeSet<String>> {
        (!self.ratings.is_empty()).then_some(&self.ratings)
    }

    /// Selected countries, `None` when unrestricted
    pub fn countries(&self) -> Option<&BTreeSet<String>> {
        (!self.countries.is_empty()).then_some(&self.countries)
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn year_range(&self) -> Option<YearRange> {
        self.year_range
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True when no field restricts the result
    pub fn is_unrestricted(&self) -> bool {
        self.content_type.is_none()
            && self.ratings.is_empty()
            && self.countries.is_empty()
            && self.genre.is_none()
            && self.year_range.is_none()
            && self.query.is_none()
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clean_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .filter_map(|v| non_blank(v.into()))
        .collect()
}
