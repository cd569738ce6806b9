//! Geographical Analysis tab.
//!
//! Titles with no country are left out of every per-country table here
//! rather than bucketed as "Unknown"; the number left out is reported.

use catalog_loader::{explode, ContentType, MultiField};
use pipeline::{count_distinct_by, FilterCriteria, MissingKeys};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::series::{CountTable, GeoSeries};
use crate::warning::{warning_for, EmptyResultWarning};

/// Leading ratings of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRatings {
    pub country: String,
    pub ratings: CountTable,
}

/// Movie/TV split of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryTypeCounts {
    pub country: String,
    pub movies: usize,
    pub tv_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeographyView {
    pub matched: usize,
    /// Matching titles with no country
    pub excluded_rows: usize,
    pub countries: CountTable,
    pub map: GeoSeries,
    pub ratings_by_country: Vec<CountryRatings>,
    pub types_by_country: Vec<CountryTypeCounts>,
    /// Distinct countries across the matching titles
    pub distinct_countries: usize,
}

impl GeographyView {
    pub fn warning(&self) -> Option<EmptyResultWarning> {
        warning_for("geography", self.matched)
    }
}

impl Dashboard {
    pub fn geography(&self, criteria: &FilterCriteria) -> GeographyView {
        let settings = self.settings();
        let rows = self.filtered("geography", criteria);
        let excluded_rows = rows.iter().filter(|r| r.countries.is_empty()).count();

        let tokens = explode(rows.iter().copied(), MultiField::Countries);
        let by_country = count_distinct_by(
            &tokens,
            |t| Some(t.value),
            |t| t.row_id,
            MissingKeys::Exclude,
        );
        let countries = CountTable::top("Country", &by_country, settings.top_countries);

        let ratings_by_country = countries
            .categories()
            .take(settings.bubble_countries)
            .map(|country| {
                let ratings = count_distinct_by(
                    tokens.iter().filter(|t| t.value == country),
                    |t| self.row(t.row_id).map(|r| r.rating_label().to_string()),
                    |t| t.row_id,
                    MissingKeys::Exclude,
                );
                CountryRatings {
                    country: country.to_string(),
                    ratings: CountTable::top("Rating", &ratings, settings.ratings_per_country),
                }
            })
            .collect();

        let types_by_country = countries
            .categories()
            .take(settings.country_type_countries)
            .map(|country| {
                let types = count_distinct_by(
                    tokens.iter().filter(|t| t.value == country),
                    |t| self.row(t.row_id).map(|r| r.content_type),
                    |t| t.row_id,
                    MissingKeys::Exclude,
                );
                CountryTypeCounts {
                    country: country.to_string(),
                    movies: types.get(ContentType::Movie).copied().unwrap_or(0),
                    tv_shows: types.get(ContentType::TvShow).copied().unwrap_or(0),
                }
            })
            .collect();

        GeographyView {
            matched: rows.len(),
            excluded_rows,
            map: GeoSeries::from(&countries),
            distinct_countries: by_country.len(),
            countries,
            ratings_by_country,
            types_by_country,
        }
    }
}
