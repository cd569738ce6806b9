//! Filter on the genre selector of the detail view.

use crate::traits::RowFilter;
use catalog_loader::CatalogRow;

/// Keeps rows listed under the selected genre.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl RowFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        row.genres.contains_ignore_case(&self.genre)
    }
}
