//! Field normalization for multi-valued text cells.
//!
//! Genres, countries, cast and directors arrive as comma-separated strings.
//! They are split once, at load time, into [`Tokens`]; aggregations then
//! work on exploded `(token, row_id)` pairs instead of re-splitting strings.

use crate::types::{CatalogRow, ShowId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator used by every multi-valued column in the source data
pub const TOKEN_SEPARATOR: char = ',';

/// Ordered sequence of atomic tokens from one multi-valued cell.
///
/// Tokens are trimmed and never empty. Order is the order in the source
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Split a raw cell into tokens, dropping empty and whitespace-only parts.
    pub fn parse(raw: &str) -> Self {
        Tokens(
            raw.split(TOKEN_SEPARATOR)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// True when some token equals `needle`, ignoring case
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.0.iter().any(|t| t.to_lowercase() == needle)
    }

    /// True when some token contains `needle_lower` as a substring.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn any_contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.0.iter().any(|t| t.to_lowercase().contains(needle_lower))
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Tokens(
            tokens
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }
}

impl From<Tokens> for Vec<String> {
    fn from(tokens: Tokens) -> Self {
        tokens.0
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// The multi-valued columns that can be exploded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiField {
    Genres,
    Countries,
    Cast,
    Directors,
}

impl MultiField {
    pub fn tokens<'a>(&self, row: &'a CatalogRow) -> &'a Tokens {
        match self {
            MultiField::Genres => &row.genres,
            MultiField::Countries => &row.countries,
            MultiField::Cast => &row.cast,
            MultiField::Directors => &row.directors,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MultiField::Genres => "genre",
            MultiField::Countries => "country",
            MultiField::Cast => "cast",
            MultiField::Directors => "director",
        }
    }
}

/// One exploded token with a back-reference to its source row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub value: &'a str,
    pub row_id: &'a ShowId,
}

/// Explode one multi-valued field of every row into `(token, row_id)` pairs.
///
/// Rows with no tokens for `field` contribute nothing here; they still count
/// everywhere else. Output order follows row order, then token order.
pub fn explode<'a, I>(rows: I, field: MultiField) -> Vec<Token<'a>>
where
    I: IntoIterator<Item = &'a CatalogRow>,
{
    rows.into_iter()
        .flat_map(|row| {
            field.tokens(row).iter().map(move |value| Token {
                value,
                row_id: &row.show_id,
            })
        })
        .collect()
}

/// Sorted, de-duplicated token values of `field` across `rows`.
///
/// Used to build selector option lists (e.g. the genre dropdown).
pub fn distinct_tokens<'a, I>(rows: I, field: MultiField) -> Vec<String>
where
    I: IntoIterator<Item = &'a CatalogRow>,
{
    let set: BTreeSet<&str> = rows
        .into_iter()
        .flat_map(|row| field.tokens(row).iter())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
