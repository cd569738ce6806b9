//! Filtering and aggregation of catalog rows.
//!
//! This crate provides:
//! - FilterCriteria, the immutable value describing the user's selection
//! - RowFilter trait and implementations, one per dashboard control
//! - FilterPipeline for composing filters
//! - Generic grouped counts and statistics (count_by, stat_by)
//!
//! ## Architecture
//! Each interaction is processed in stages:
//! 1. Filters narrow the catalog to the rows matching the criteria
//! 2. Rows (or their exploded tokens) are grouped by a key
//! 3. Each group is counted or reduced to a statistic
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply, count_by, FilterCriteria, MissingKeys};
//!
//! let criteria = FilterCriteria::new()
//!     .with_content_type(ContentType::Movie)
//!     .with_year_range(2015, 2020);
//!
//! let rows = apply(catalog.rows(), &criteria);
//! let by_rating = count_by(&rows, |r| r.rating.clone(), MissingKeys::Bucket);
//! ```

pub mod aggregate;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use aggregate::{
    count_by, count_distinct_by, reduce, stat_by, AggregationResult, Bucket, MissingKeys, Reducer,
};
pub use criteria::{FilterCriteria, YearRange};
pub use filter_pipeline::{apply, FilterPipeline};
pub use traits::RowFilter;
