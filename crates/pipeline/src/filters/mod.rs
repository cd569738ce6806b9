//! Filter implementations for the row pipeline.
//!
//! One filter per control of the dashboard. They are composed into a
//! FilterPipeline from a FilterCriteria.

pub mod content_type;
pub mod country;
pub mod genre;
pub mod rating;
pub mod release_year;
pub mod text_search;

// Re-export for convenience
pub use content_type::ContentTypeFilter;
pub use country::CountryFilter;
pub use genre::GenreFilter;
pub use rating::RatingFilter;
pub use release_year::ReleaseYearFilter;
pub use text_search::TextSearchFilter;
