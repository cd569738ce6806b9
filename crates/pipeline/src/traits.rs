//! Core traits for the filtering pipeline.
//!
//! This module defines the RowFilter trait that allows composable,
//! extensible predicates to be applied to catalog rows.

use catalog_loader::CatalogRow;

/// Core trait for filtering catalog rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a built pipeline be shared between requests
/// - Filters work on borrowed rows; the catalog itself is never copied
/// - Filtering cannot fail: a filter that matches nothing yields an empty set
pub trait RowFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `row` passes this filter.
    fn matches(&self, row: &CatalogRow) -> bool;

    /// Apply this filter to a set of rows, preserving their order.
    fn apply<'a>(&self, rows: Vec<&'a CatalogRow>) -> Vec<&'a CatalogRow> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}
