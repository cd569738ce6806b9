//! Catalog building logic.
//!
//! Turns parsed rows into a [`Catalog`]:
//! - drop duplicate identifiers (first occurrence wins)
//! - build the id -> position index
//! - record the load summary

use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// This is the main entry point for loading data. A missing file is
    /// reported as [`LoadError::FileNotFound`] rather than a bare I/O error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading catalog from {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LoadError::Io(e),
        })?;

        let mut catalog = Self::from_reader(BufReader::new(file))?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load the catalog from any CSV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let (rows, summary) = parser::parse_catalog(reader)?;
        let catalog = Self::from_rows(rows, summary);

        let (movies, tv_shows) = catalog.counts();
        tracing::info!(
            "Loaded {} titles ({} movies, {} TV shows) from {} records",
            catalog.len(),
            movies,
            tv_shows,
            catalog.summary.records_read
        );
        if catalog.summary.duplicate_rows > 0 || catalog.summary.skipped_rows > 0 {
            tracing::warn!(
                "Dropped {} duplicate and {} unusable records",
                catalog.summary.duplicate_rows,
                catalog.summary.skipped_rows
            );
        }

        Ok(catalog)
    }

    /// Build a catalog from already-parsed rows
    ///
    /// Duplicate identifiers are dropped and counted into `summary`.
    pub fn from_rows(rows: Vec<CatalogRow>, mut summary: LoadSummary) -> Self {
        let mut catalog = Catalog::new();
        catalog.rows.reserve(rows.len());

        for row in rows {
            let show_id = row.show_id.clone();
            if !catalog.insert_row(row) {
                tracing::debug!("Dropping duplicate row {}", show_id);
                summary.duplicate_rows += 1;
            }
        }

        // Rows dropped as duplicates no longer contribute to the undated count
        summary.undated_rows = catalog.rows.iter().filter(|r| r.date_added.is_none()).count();
        catalog.summary = summary;
        catalog
    }
}

impl FromIterator<CatalogRow> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogRow>>(iter: T) -> Self {
        Catalog::from_rows(iter.into_iter().collect(), LoadSummary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,First,,,,\"September 25, 2021\",2020,PG-13,90 min,Dramas,
s2,TV Show,Second,,,,,2021,TV-MA,1 Season,Docuseries,
s1,Movie,Duplicate,,,,,2020,PG-13,91 min,Dramas,
";

    #[test]
    fn test_from_reader_dedupes() {
        let catalog = Catalog::from_reader(FIXTURE.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("s1").unwrap().title, "First");
        assert_eq!(catalog.summary().records_read, 3);
        assert_eq!(catalog.summary().duplicate_rows, 1);
        assert_eq!(catalog.summary().undated_rows, 1);
        assert!(catalog.source().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source().map(|p| p.as_path()), Some(file.path()));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load_from_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_collect_rows() {
        let catalog: Catalog = vec![
            CatalogRow::new("a", "A", ContentType::Movie),
            CatalogRow::new("b", "B", ContentType::TvShow),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.counts(), (1, 1));
        assert_eq!(catalog.summary().undated_rows, 2);
    }
}
