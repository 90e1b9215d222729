//! # Catalog Crate
//!
//! This crate handles loading the movie catalog from a CSV source.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Catalog)
//! - **loader**: Parse the CSV source into a Catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_catalog;
//! use std::path::Path;
//!
//! // Load the catalog once at startup
//! let catalog = load_catalog(Path::new("data/movies.csv"))?;
//!
//! // Query data by row position
//! let movie = catalog.get(0).unwrap();
//! println!("{} [{}]", movie.title, movie.genres);
//! ```
//!
//! The catalog is loaded once and never mutated afterwards: row position is
//! the stable identifier used as the index space of the similarity matrix,
//! so the load order must be preserved exactly.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::{load_catalog, load_catalog_from_reader};
pub use types::{Catalog, Movie, MovieIndex};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_push_and_get() {
        let mut catalog = Catalog::new();
        catalog.push(Movie {
            title: "Toy Story".to_string(),
            genres: "Animation Comedy".to_string(),
        });

        let movie = catalog.get(0).unwrap();
        assert_eq!(movie.title, "Toy Story");
        assert_eq!(movie.genres, "Animation Comedy");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_first_index_wins_for_duplicate_titles() {
        let catalog = Catalog::from_movies(vec![
            Movie {
                title: "Dune".to_string(),
                genres: "SciFi".to_string(),
            },
            Movie {
                title: "Dune".to_string(),
                genres: "Adventure".to_string(),
            },
        ]);

        // Titles are not guaranteed unique; lookups resolve to the first row
        assert_eq!(catalog.position_of_title("Dune"), Some(0));
    }

    #[test]
    fn test_position_of_unknown_title() {
        let catalog = Catalog::new();
        assert_eq!(catalog.position_of_title("Nope"), None);
    }
}
