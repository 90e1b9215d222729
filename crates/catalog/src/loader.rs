//! CSV loader for the movie catalog.
//!
//! The source is a row-oriented table with at minimum a `title` column and a
//! `genres` column; extra columns are ignored. Header presence is validated
//! up front so a wrong file fails with a clear `MissingColumn` error rather
//! than a per-row deserialization error.

use crate::error::{DataLoadError, Result};
use crate::types::{Catalog, Movie};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Raw CSV row as it appears in the source table.
///
/// Both fields are optional at the serde level: some exports leave genre
/// cells empty, and a handful of rows in scraped datasets have no title.
/// Normalization happens in `load_catalog_from_reader`.
#[derive(Debug, Deserialize)]
struct MovieRow {
    title: Option<String>,
    genres: Option<String>,
}

/// Load the catalog from a CSV file on disk.
///
/// This is the main entry point for loading data. It runs once at startup;
/// there is no retry path.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let catalog = load_catalog_from_reader(file)?;
    info!(movies = catalog.len(), path = %path.display(), "Loaded movie catalog");
    Ok(catalog)
}

/// Load the catalog from any reader (used directly by tests).
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Validate required columns before touching any record
    let headers = csv_reader.headers()?.clone();
    for required in ["title", "genres"] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn {
                column: required.to_string(),
            });
        }
    }

    let mut catalog = Catalog::new();
    for result in csv_reader.deserialize() {
        let row: MovieRow = result?;
        catalog.push(Movie {
            title: row.title.unwrap_or_default(),
            // Missing genre cells normalize to the empty string; the
            // vectorizer produces a zero vector for them
            genres: row.genres.unwrap_or_default(),
        });
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
title,genres
Toy Story,Animation Comedy
Shrek,Animation Comedy Fantasy
Saw,Horror
";

    #[test]
    fn test_load_sample() {
        let catalog = load_catalog_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().title, "Toy Story");
        assert_eq!(catalog.get(2).unwrap().genres, "Horror");
    }

    #[test]
    fn test_missing_genres_normalize_to_empty() {
        let data = "title,genres\nNo Genre Movie,\n";
        let catalog = load_catalog_from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.get(0).unwrap().genres, "");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "id,title,genres,year\n1,Heat,Crime Thriller,1995\n";
        let catalog = load_catalog_from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.get(0).unwrap().title, "Heat");
        assert_eq!(catalog.get(0).unwrap().genres, "Crime Thriller");
    }

    #[test]
    fn test_missing_required_column() {
        let data = "name,genres\nHeat,Crime\n";
        let err = load_catalog_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column } if column == "title"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
