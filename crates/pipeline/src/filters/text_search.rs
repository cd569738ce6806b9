//! Free-text search over titles, descriptions and credits.

use crate::traits::RowFilter;
use catalog_loader::CatalogRow;

/// Keeps rows whose title, description, director or cast contains the query.
///
/// ## Algorithm
/// Plain case-insensitive substring match. The query is not tokenized, so
/// "thing" matches "Stranger Things".
pub struct TextSearchFilter {
    query: String,
}

impl TextSearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl RowFilter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        row.title.to_lowercase().contains(&self.query)
            || row.description.to_lowercase().contains(&self.query)
            || row.directors.any_contains_ignore_case(&self.query)
            || row.cast.any_contains_ignore_case(&self.query)
    }
}
