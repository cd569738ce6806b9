//! Filter on the country multi-select.

use crate::traits::RowFilter;
use catalog_loader::CatalogRow;
use std::collections::HashSet;

/// Keeps rows produced in at least one of the selected countries.
///
/// ## Algorithm
/// A row matches when any of its country tokens equals a selected country,
/// ignoring case. Co-productions therefore match each of their countries.
pub struct CountryFilter {
    countries: HashSet<String>,
}

impl CountryFilter {
    pub fn new<'a>(countries: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            countries: countries.into_iter().map(|c| c.to_lowercase()).collect(),
        }
    }
}

impl RowFilter for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        row.countries
            .iter()
            .any(|country| self.countries.contains(&country.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_loader::{ContentType, Tokens};

    fn from(id: &str, countries: &str) -> CatalogRow {
        let mut row = CatalogRow::new(id, id, ContentType::Movie);
        row.countries = Tokens::parse(countries);
        row
    }

    #[test]
    fn test_country_filter() {
        let rows = vec![
            from("s1", "United States"),
            from("s2", "India, United Kingdom"),
            from("s3", ""),
            from("s4", "South Korea"),
        ];
        let selected = vec!["united kingdom".to_string(), "United States".to_string()];

        let filtered = CountryFilter::new(&selected).apply(rows.iter().collect());

        let ids: Vec<&str> = filtered.iter().map(|r| r.show_id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_partial_name_does_not_match() {
        let rows = vec![from("s1", "United States")];
        let selected = vec!["United".to_string()];

        let filtered = CountryFilter::new(&selected).apply(rows.iter().collect());
        assert!(filtered.is_empty());
    }
}
