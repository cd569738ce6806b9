//! View assembly for the Netflix catalog dashboard.
//!
//! This is the only crate that knows about individual dashboard tabs. It
//! combines the generic filtering and aggregation of the `pipeline` crate
//! into the tables and series each tab renders.
//!
//! ## Example Usage
//! ```ignore
//! let dashboard = Dashboard::new(Arc::new(catalog), DashboardSettings::default());
//! let criteria = FilterCriteria::new().with_content_type(ContentType::Movie);
//!
//! let overview = dashboard.overview(&criteria);
//! if let Some(warning) = overview.warning() {
//!     println!("{}", warning);
//! }
//! ```

pub mod dashboard;
pub mod series;
pub mod settings;
pub mod views;
pub mod warning;

pub use dashboard::{Dashboard, FilterOptions, Summary};
pub use series::{
    CountEntry, CountTable, DecadeTypeCell, GenreTrendPoint, GeoPoint, GeoSeries, HeatmapCell,
    YearPoint, YearSeries,
};
pub use settings::DashboardSettings;
pub use views::{
    CountryRatings, CountryTypeCounts, DetailRecord, DetailStats, DetailView, DurationHistogram,
    GenresView, GeographyView, HistogramBin, OverviewView, TrendsView,
};
pub use warning::EmptyResultWarning;
