//! Parser for the Netflix titles CSV.
//!
//! Expected header (Kaggle `netflix_titles.csv`):
//! `show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description`
//!
//! Only the identifier and type columns are required. Every other column may
//! be absent, in which case its field takes an empty default. Cells that do
//! not coerce (dates, years, durations) become `None` instead of failing the
//! load.

use crate::error::{Result, SchemaError};
use crate::normalize::Tokens;
use crate::types::*;
use chrono::NaiveDate;
use csv::StringRecord;
use std::io::Read;

/// Formats accepted for `date_added`, tried in order
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%d-%b-%y"];

/// Header positions of the columns we understand.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnMap {
    show_id: usize,
    content_type: usize,
    title: Option<usize>,
    director: Option<usize>,
    cast: Option<usize>,
    country: Option<usize>,
    date_added: Option<usize>,
    release_year: Option<usize>,
    rating: Option<usize>,
    duration: Option<usize>,
    genres: Option<usize>,
    description: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from the header row.
    ///
    /// Names are compared case-insensitively after trimming. The first alias
    /// found wins.
    fn from_headers(headers: &StringRecord) -> std::result::Result<Self, SchemaError> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(SchemaError::EmptyHeader);
        }

        let find = |aliases: &[&str]| {
            aliases.iter().find_map(|alias| {
                headers
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(alias))
            })
        };
        let require = |name: &str, aliases: &[&str]| {
            find(aliases).ok_or_else(|| SchemaError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            show_id: require("show_id", &["show_id", "id"])?,
            content_type: require("type", &["type", "content_type"])?,
            title: find(&["title"]),
            director: find(&["director", "directors"]),
            cast: find(&["cast"]),
            country: find(&["country", "countries"]),
            date_added: find(&["date_added"]),
            release_year: find(&["release_year"]),
            rating: find(&["rating"]),
            duration: find(&["duration"]),
            genres: find(&["listed_in", "genres"]),
            description: find(&["description"]),
        })
    }
}

/// Read a cell, trimmed; missing columns read as empty
fn cell(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
}

/// Parse every record of a catalog CSV.
///
/// Returns the rows in source order, with duplicate identifiers still
/// present (de-duplication happens when building the [`Catalog`]), and the
/// record/skip counters.
pub fn parse_catalog<R: Read>(reader: R) -> Result<(Vec<CatalogRow>, LoadSummary)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut summary = LoadSummary::default();

    for record in csv_reader.records() {
        let record = record?;
        summary.records_read += 1;

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let show_id = cell(&record, Some(columns.show_id));
        if show_id.is_empty() {
            tracing::warn!("Skipping record at line {}: empty identifier", line);
            summary.skipped_rows += 1;
            continue;
        }

        let raw_type = cell(&record, Some(columns.content_type));
        let Some(content_type) = ContentType::parse(raw_type) else {
            tracing::warn!(
                "Skipping {} at line {}: unrecognised type {:?}",
                show_id,
                line,
                raw_type
            );
            summary.skipped_rows += 1;
            continue;
        };

        let raw_date = cell(&record, columns.date_added);
        let date_added = parse_date(raw_date);
        if date_added.is_none() && !raw_date.is_empty() {
            tracing::debug!("{}: unparseable date_added {:?}", show_id, raw_date);
        }

        let rating = cell(&record, columns.rating);

        rows.push(CatalogRow {
            show_id: show_id.to_string(),
            title: cell(&record, columns.title).to_string(),
            content_type,
            directors: Tokens::parse(cell(&record, columns.director)),
            cast: Tokens::parse(cell(&record, columns.cast)),
            countries: Tokens::parse(cell(&record, columns.country)),
            date_added,
            release_year: parse_year(cell(&record, columns.release_year)),
            rating: (!rating.is_empty()).then(|| rating.to_string()),
            duration: parse_duration(cell(&record, columns.duration), content_type),
            genres: Tokens::parse(cell(&record, columns.genres)),
            description: cell(&record, columns.description).to_string(),
        });
    }

    Ok((rows, summary))
}

/// Parse a `date_added` cell.
///
/// Example: "September 25, 2021" -> Some(2021-09-25)
///          "soon" -> None
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse a `release_year` cell, accepting float renderings like "2019.0".
/// Values outside the `i32` range are rejected.
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    s.parse::<f64>()
        .ok()
        .filter(|y| y.is_finite() && y.fract() == 0.0)
        .filter(|y| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(y))
        .map(|y| y as i32)
}

/// Parse a `duration` cell into the unit implied by the content type.
///
/// Example: ("90 min", Movie) -> Some(Minutes(90))
///          ("2 Seasons", TvShow) -> Some(Seasons(2))
fn parse_duration(s: &str, content_type: ContentType) -> Option<Duration> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let value: u32 = digits.parse().ok()?;
    Some(match content_type {
        ContentType::Movie => Duration::Minutes(value),
        ContentType::TvShow => Duration::Seasons(value),
    })
}
