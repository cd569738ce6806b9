//! Filter on the maturity-rating multi-select.

use crate::traits::RowFilter;
use catalog_loader::CatalogRow;
use std::collections::HashSet;

/// Keeps rows whose rating is one of the selected ratings.
///
/// Rows without a rating carry the "Unknown" label, so selecting "Unknown"
/// keeps them.
pub struct RatingFilter {
    ratings: HashSet<String>,
}

impl RatingFilter {
    /// Create a new RatingFilter.
    ///
    /// # Arguments
    /// * `ratings` - Accepted rating labels, compared case-insensitively
    pub fn new<'a>(ratings: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            ratings: ratings.into_iter().map(|r| r.to_lowercase()).collect(),
        }
    }
}

impl RowFilter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        self.ratings.contains(&row.rating_label().to_lowercase())
    }
}
