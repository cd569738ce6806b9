//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains row filters
//! together using the builder pattern, and the [`apply`] entry point that
//! builds a pipeline from a [`FilterCriteria`].

use crate::criteria::FilterCriteria;
use crate::filters::*;
use crate::traits::RowFilter;
use catalog_loader::CatalogRow;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ContentTypeFilter::new(ContentType::Movie))
///     .add_filter(ReleaseYearFilter::new(YearRange::new(2010, 2021)));
///
/// let filtered = pipeline.apply(catalog.rows());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn RowFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of criteria.
    ///
    /// Only fields that are set get a filter, so unrestricted criteria give
    /// an empty pipeline.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(content_type) = criteria.content_type() {
            pipeline = pipeline.add_filter(ContentTypeFilter::new(content_type));
        }
        if let Some(range) = criteria.year_range() {
            pipeline = pipeline.add_filter(ReleaseYearFilter::new(range));
        }
        if let Some(ratings) = criteria.ratings() {
            pipeline = pipeline.add_filter(RatingFilter::new(ratings));
        }
        if let Some(countries) = criteria.countries() {
            pipeline = pipeline.add_filter(CountryFilter::new(countries));
        }
        if let Some(genre) = criteria.genre() {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        if let Some(query) = criteria.query() {
            pipeline = pipeline.add_filter(TextSearchFilter::new(query));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl RowFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// ## Algorithm
    /// 1. Start with every input row, in order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving rows
    ///
    /// The result keeps the input order. An empty result is a valid outcome,
    /// not an error.
    pub fn apply<'a>(&self, rows: &'a [CatalogRow]) -> Vec<&'a CatalogRow> {
        let mut current: Vec<&CatalogRow> = rows.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `criteria` to `rows`, combining every set field with AND.
pub fn apply<'a>(rows: &'a [CatalogRow], criteria: &FilterCriteria) -> Vec<&'a CatalogRow> {
    FilterPipeline::from_criteria(criteria).apply(rows)
}
