//! Filter on the Movie / TV Show selector.

use crate::traits::RowFilter;
use catalog_loader::{CatalogRow, ContentType};

/// Keeps rows of a single content type.
pub struct ContentTypeFilter {
    content_type: ContentType,
}

impl ContentTypeFilter {
    pub fn new(content_type: ContentType) -> Self {
        Self { content_type }
    }
}

impl RowFilter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        row.content_type == self.content_type
    }
}
