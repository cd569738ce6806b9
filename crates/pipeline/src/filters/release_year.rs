//! Filter on the release-year slider.

use crate::criteria::YearRange;
use crate::traits::RowFilter;
use catalog_loader::CatalogRow;

/// Keeps rows released within an inclusive year range.
///
/// Rows without a release year never match.
pub struct ReleaseYearFilter {
    range: YearRange,
}

impl ReleaseYearFilter {
    pub fn new(range: YearRange) -> Self {
        Self { range }
    }
}

impl RowFilter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, row: &CatalogRow) -> bool {
        row.release_year
            .is_some_and(|year| self.range.contains(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_loader::ContentType;

    fn released(id: &str, year: Option<i32>) -> CatalogRow {
        let mut row = CatalogRow::new(id, id, ContentType::Movie);
        row.release_year = year;
        row
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rows = vec![
            released("y2014", Some(2014)),
            released("y2015", Some(2015)),
            released("y2018", Some(2018)),
            released("y2020", Some(2020)),
            released("y2021", Some(2021)),
            released("none", None),
        ];

        let filter = ReleaseYearFilter::new(YearRange::new(2015, 2020));
        let filtered = filter.apply(rows.iter().collect());

        let ids: Vec<&str> = filtered.iter().map(|r| r.show_id.as_str()).collect();
        assert_eq!(ids, vec!["y2015", "y2018", "y2020"]);
    }
}
