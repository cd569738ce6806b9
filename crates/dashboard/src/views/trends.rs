//! Trends Over Time tab.

use pipeline::{count_by, stat_by, FilterCriteria, MissingKeys, Reducer};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::series::{CountEntry, CountTable, HeatmapCell, YearSeries};
use crate::warning::{warning_for, EmptyResultWarning};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendsView {
    pub matched: usize,
    pub releases: YearSeries,
    pub additions: YearSeries,
    /// Matching titles whose added date is unknown
    pub undated: usize,
    /// Ascending by year, then month
    pub monthly_heatmap: Vec<HeatmapCell>,
    /// Always twelve entries, January first
    pub months: CountTable,
    pub movie_minutes_by_year: YearSeries,
}

impl TrendsView {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("trends", self.matched)
    }
}

impl Dashboard {
    pub fn trends(&self, criteria: &FilterCriteria) -> TrendsView {
        let settings = self.settings();
        let rows = self.filtered("trends", criteria);

        let releases = count_by(&rows, |r| r.release_year, MissingKeys::Exclude);
        let additions = count_by(&rows, |r| r.year_added(), MissingKeys::Bucket);

        let monthly_heatmap = count_by(
            &rows,
            |r| r.year_added().zip(r.month_added()),
            MissingKeys::Exclude,
        )
        .sorted_by_key()
        .into_iter()
        .filter_map(|(bucket, count)| {
            bucket
                .key()
                .map(|&(year, month)| HeatmapCell { year, month, count })
        })
        .collect();

        let by_month = count_by(&rows, |r| r.month_added(), MissingKeys::Exclude);
        let months = MONTH_NAMES
            .iter()
            .zip(1u32..)
            .map(|(name, month)| CountEntry {
                category: name.to_string(),
                count: by_month.get(month).copied().unwrap_or(0),
            })
            .collect();

        let movie_minutes = stat_by(
            rows.iter().filter(|r| r.is_movie()),
            |r| r.release_year,
            |r| r.duration_minutes().map(f64::from),
            Reducer::Mean,
            MissingKeys::Exclude,
        );

        TrendsView {
            matched: rows.len(),
            releases: YearSeries::from_counts("Release Year", &releases)
                .since(settings.trend_start_year),
            additions: YearSeries::from_counts("Year Added", &additions),
            undated: additions.get_unknown().copied().unwrap_or(0),
            monthly_heatmap,
            months: CountTable::new("Month Added", months),
            movie_minutes_by_year: YearSeries::from_stats("Mean Movie Minutes", &movie_minutes),
        }
    }
}
