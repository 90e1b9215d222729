//! Core domain types for the movie catalog.

use serde::{Deserialize, Serialize};

/// A movie's position in the catalog (0-based row order, stable for the
/// process lifetime). This is the index space of the similarity matrix.
pub type MovieIndex = usize;

/// A single catalog entry.
///
/// The title is the external-facing identifier; the genre field is free-form
/// text (space- or pipe-delimited genre names), kept as a raw string because
/// the vectorizer tokenizes it downstream. Missing genre cells are
/// normalized to the empty string at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genres: String,
}

/// The ordered set of known movies available for recommendation.
///
/// Row order is fixed at load time and reused as the row/column index space
/// of the similarity matrix, so the catalog must never be reordered after
/// construction. Titles are not guaranteed unique; lookups resolve to the
/// first matching row by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Build a catalog from an already-ordered list of movies
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get a movie by row position
    ///
    /// Returns `None` if the index is out of range.
    pub fn get(&self, index: MovieIndex) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Append a movie, assigning it the next row position
    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Iterate over movies in row order
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Iterate over titles in row order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// Iterate over genre strings in row order (the vectorizer's input)
    pub fn genre_docs(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.genres.as_str())
    }

    /// Resolve a title to its row position (exact match, first row wins)
    pub fn position_of_title(&self, title: &str) -> Option<MovieIndex> {
        self.movies.iter().position(|m| m.title == title)
    }
}
