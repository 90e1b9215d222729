//! # Engine Crate
//!
//! This crate implements the content-similarity recommendation engine.
//!
//! ## Components
//!
//! ### Vectorizer
//! Bag-of-words TF-IDF representation of each movie's genre text:
//! - Lowercased, alphanumeric tokens of length >= 2
//! - Common English stop-words excluded from the vocabulary
//! - Sorted vocabulary so output is deterministic
//!
//! ### Similarity Matrix
//! Pairwise cosine similarity across all catalog rows, computed once per
//! process lifetime. Symmetric, scores in [0, 1], row/column i corresponds
//! to Catalog row i.
//!
//! ### Indexer
//! The load-or-compute duality behind a single `CatalogIndexer` trait:
//! - `ComputeIndexer` builds the matrix live from the CSV source
//! - `PrecomputedIndexer` loads a previously written artifact from disk
//!
//! ### Matching + Recommender
//! Fuzzy title lookup (similarity-ratio matching with a configurable
//! acceptance threshold) and ranked nearest-neighbor read of one matrix row.
//! Both are pure functions of immutable inputs.
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{CatalogIndexer, ComputeIndexer, recommend};
//! use std::path::Path;
//!
//! let indexer = ComputeIndexer::new(Path::new("data/movies.csv"));
//! let (catalog, matrix) = indexer.load()?;
//!
//! let titles = recommend("toy story", &catalog, &matrix);
//! for title in titles {
//!     println!("{title}");
//! }
//! ```

// Public modules
pub mod indexer;
pub mod matching;
pub mod matrix;
pub mod recommend;
pub mod vectorize;

// Re-export commonly used types
pub use indexer::{
    CatalogIndexer, ComputeIndexer, IndexArtifact, IndexError, PrecomputedIndexer, build_matrix,
};
pub use matching::{DEFAULT_MATCH_THRESHOLD, MatchConfig, best_match, close_matches};
pub use matrix::SimilarityMatrix;
pub use recommend::{MAX_RECOMMENDATIONS, RankedTitle, recommend, recommend_ranked};
pub use vectorize::{Vectorizer, VectorizerConfig};
