//! One module per dashboard tab.
//!
//! Each module adds its view function to [`Dashboard`](crate::Dashboard) and
//! defines the struct it returns.

pub mod detail;
pub mod genres;
pub mod geography;
pub mod overview;
pub mod trends;

pub use detail::{DetailRecord, DetailStats, DetailView};
pub use genres::GenresView;
pub use geography::{CountryRatings, CountryTypeCounts, GeographyView};
pub use overview::{duration_histogram, DurationHistogram, HistogramBin, OverviewView};
pub use trends::{TrendsView, MONTH_NAMES};
