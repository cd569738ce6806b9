//! Tunable limits for the dashboard views.

use serde::{Deserialize, Serialize};

/// How many entries each view keeps and where time series start.
///
/// Missing keys in a deserialized settings block fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Ratings shown in the overview table
    pub top_ratings: usize,
    pub top_genres: usize,
    /// Genres that get a per-year trend line
    pub trend_genres: usize,
    /// Directors and cast members shown in the genres view
    pub top_people: usize,
    pub top_countries: usize,
    /// Countries that get a rating breakdown
    pub bubble_countries: usize,
    pub ratings_per_country: usize,
    /// Countries that get a Movie/TV split
    pub country_type_countries: usize,
    pub max_seasons: usize,
    /// First release year of the trends series
    pub trend_start_year: i32,
    pub duration_bin_minutes: u32,
    /// Records returned by the detail view
    pub detail_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_ratings: 10,
            top_genres: 15,
            trend_genres: 8,
            top_people: 10,
            top_countries: 20,
            bubble_countries: 15,
            ratings_per_country: 5,
            country_type_countries: 10,
            max_seasons: 15,
            trend_start_year: 1990,
            duration_bin_minutes: 10,
            detail_limit: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"top_genres": 5, "trend_start_year": 2000}"#).unwrap();

        assert_eq!(settings.top_genres, 5);
        assert_eq!(settings.trend_start_year, 2000);
        assert_eq!(settings.top_ratings, 10);
        assert_eq!(settings.detail_limit, 100);
    }
}
