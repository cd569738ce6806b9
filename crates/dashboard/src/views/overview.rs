//! Overview tab: content types, ratings, decades and durations.

use catalog_loader::Duration;
use pipeline::{count_by, reduce, FilterCriteria, MissingKeys, Reducer};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::series::{CountEntry, CountTable, DecadeTypeCell};
use crate::warning::{warning_for, EmptyResultWarning};

/// A histogram bin covering `start..=end` minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub start: u32,
    pub end: u32,
    pub count: usize,
}

/// Distribution of movie running times. TV shows never contribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationHistogram {
    pub bin_minutes: u32,
    pub bins: Vec<HistogramBin>,
    pub mean_minutes: Option<f64>,
    pub median_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub matched: usize,
    pub content_types: CountTable,
    pub ratings: CountTable,
    /// Ascending by decade
    pub decades: CountTable,
    pub decade_types: Vec<DecadeTypeCell>,
    pub movie_durations: DurationHistogram,
    /// Ascending by number of seasons
    pub seasons: CountTable,
}

impl OverviewView {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("overview", self.matched)
    }
}

impl Dashboard {
    pub fn overview(&self, criteria: &FilterCriteria) -> OverviewView {
        let settings = self.settings();
        let rows = self.filtered("overview", criteria);

        let content_types = count_by(&rows, |r| Some(r.content_type.label()), MissingKeys::Bucket);
        let ratings = count_by(&rows, |r| r.rating.clone(), MissingKeys::Bucket);
        let decades = count_by(&rows, |r| r.decade(), MissingKeys::Bucket);

        // Titles without a release year have no decade column in the crosstab
        let decade_types = count_by(
            &rows,
            |r| r.decade().map(|d| (d, r.content_type)),
            MissingKeys::Exclude,
        )
        .sorted_by_key()
        .into_iter()
        .filter_map(|(bucket, count)| {
            bucket.key().map(|&(decade, content_type)| DecadeTypeCell {
                decade,
                content_type: content_type.label().to_string(),
                count,
            })
        })
        .collect();

        let minutes: Vec<u32> = rows
            .iter()
            .filter(|r| r.is_movie())
            .filter_map(|r| r.duration_minutes())
            .collect();

        let seasons = count_by(
            rows.iter().filter(|r| r.is_tv_show()),
            |r| r.duration_seasons(),
            MissingKeys::Exclude,
        )
        .sorted_by_key()
        .into_iter()
        .filter_map(|(bucket, count)| {
            bucket.key().map(|&n| CountEntry {
                category: Duration::Seasons(n).to_string(),
                count,
            })
        })
        .take(settings.max_seasons)
        .collect();

        OverviewView {
            matched: rows.len(),
            content_types: CountTable::sorted("Content Type", &content_types),
            ratings: CountTable::top("Rating", &ratings, settings.top_ratings),
            decades: CountTable::by_key("Decade", &decades),
            decade_types,
            movie_durations: duration_histogram(&minutes, settings.duration_bin_minutes),
            seasons: CountTable::new("Seasons", seasons),
        }
    }
}

/// Bin `minutes` into fixed-width bins, ascending. Empty bins are omitted.
pub fn duration_histogram(minutes: &[u32], bin_minutes: u32) -> DurationHistogram {
    let width = bin_minutes.max(1);
    let bins = count_by(minutes, |&&m| Some(m / width * width), MissingKeys::Exclude)
        .sorted_by_key()
        .into_iter()
        .filter_map(|(bucket, count)| {
            bucket.key().map(|&start| HistogramBin {
                start,
                end: start.saturating_add(width - 1),
                count,
            })
        })
        .collect();

    let values: Vec<f64> = minutes.iter().map(|&m| f64::from(m)).collect();
    DurationHistogram {
        bin_minutes: width,
        bins,
        mean_minutes: reduce(&values, Reducer::Mean),
        median_minutes: reduce(&values, Reducer::Median),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_histogram_top_bin_saturates() {
        let histogram = duration_histogram(&[u32::MAX], 10);

        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].start, u32::MAX / 10 * 10);
        assert_eq!(histogram.bins[0].end, u32::MAX);
        assert_eq!(histogram.bins[0].count, 1);
    }

    #[test]
    fn test_duration_histogram_bins() {
        let histogram = duration_histogram(&[90, 95, 99, 100, 121], 10);

        assert_eq!(
            histogram.bins,
            vec![
                HistogramBin { start: 90, end: 99, count: 3 },
                HistogramBin { start: 100, end: 109, count: 1 },
                HistogramBin { start: 120, end: 129, count: 1 },
            ]
        );
        assert_eq!(histogram.mean_minutes, Some(101.0));
        assert_eq!(histogram.median_minutes, Some(99.0));
    }

    #[test]
    fn test_duration_histogram_empty() {
        let histogram = duration_histogram(&[], 0);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.bin_minutes, 1);
        assert_eq!(histogram.mean_minutes, None);
    }
}
