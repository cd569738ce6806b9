//! # Catalog Loader Crate
//!
//! This crate loads the Netflix titles CSV into a typed, read-only table.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogRow, ContentType, Duration, Catalog)
//! - **parser**: Parse CSV records into typed rows
//! - **normalize**: Split multi-valued cells into tokens and explode them
//! - **index**: Build the Catalog (de-duplication, id index)
//! - **cache**: Memoize loaded catalogs per source
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog_loader::{Catalog, MultiField, explode};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("netflix_titles.csv"))?;
//!
//! let genres = explode(catalog.rows(), MultiField::Genres);
//! println!("{} titles, {} genre tags", catalog.len(), genres.len());
//! ```

pub mod cache;
pub mod error;
pub mod index;
pub mod normalize;
pub mod parser;
pub mod types;

pub use cache::CatalogCache;
pub use error::{LoadError, Result, SchemaError};
pub use normalize::{distinct_tokens, explode, MultiField, Token, Tokens};
pub use types::{
    Catalog, CatalogRow, ContentType, Duration, LoadSummary, ShowId, UNKNOWN_LABEL,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.counts(), (0, 0));
        assert_eq!(*catalog.summary(), LoadSummary::default());
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        assert!(catalog.get("s999").is_none());
        assert!(catalog.rows().is_empty());
        assert!(explode(catalog.rows(), MultiField::Cast).is_empty());
        assert!(distinct_tokens(catalog.rows(), MultiField::Countries).is_empty());
    }
}
