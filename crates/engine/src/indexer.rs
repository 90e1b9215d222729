//! Catalog indexing: the load-or-compute duality behind one interface.
//!
//! The engine needs a `(Catalog, SimilarityMatrix)` pair at startup. It can
//! either compute the matrix live from the CSV source or load a precomputed
//! artifact written by an earlier `index` run. Both paths sit behind the
//! `CatalogIndexer` trait so the caller selects one by configuration instead
//! of branching through duplicated code paths.
//!
//! Indexing runs once per process lifetime; the returned structures are
//! immutable, shared read-only state for the remainder of the process.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use catalog::{Catalog, DataLoadError, load_catalog};

use crate::matrix::SimilarityMatrix;
use crate::vectorize::{Vectorizer, VectorizerConfig};

/// Errors that can occur while building or loading the index.
///
/// All of these are startup failures: the system cannot run without its
/// catalog and matrix, so they are fatal and surfaced immediately.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Catalog source missing or malformed
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Precomputed artifact could not be found or opened
    #[error("Failed to open index artifact: {path}")]
    ArtifactNotFound { path: String },

    /// Precomputed artifact did not deserialize
    #[error("Malformed index artifact: {0}")]
    ArtifactMalformed(#[from] serde_json::Error),

    /// Artifact catalog and matrix disagree on dimensions
    #[error("Inconsistent index artifact: catalog has {movies} movies but matrix is {rows}x{rows}")]
    DimensionMismatch { movies: usize, rows: usize },

    /// I/O error while writing an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;

/// Source of the `(Catalog, SimilarityMatrix)` pair.
///
/// ## Design Note
/// Implementations are constructed once at process start; `load` is called
/// once and the result is wrapped in an `Arc` by the caller. There is no
/// retry path and no mutation afterwards.
pub trait CatalogIndexer {
    fn load(&self) -> Result<(Catalog, SimilarityMatrix)>;
}

/// Builds the genre TF-IDF vectors and the similarity matrix for one
/// catalog. Deterministic: identical input produces a bit-identical matrix.
pub fn build_matrix(catalog: &Catalog, config: &VectorizerConfig) -> SimilarityMatrix {
    let docs: Vec<&str> = catalog.genre_docs().collect();
    let vectorizer = Vectorizer::fit(&docs, config.clone());
    let vectors: Vec<Vec<f64>> = docs.iter().map(|d| vectorizer.transform(d)).collect();

    info!(
        movies = catalog.len(),
        vocabulary = vectorizer.vocabulary_len(),
        "Computed similarity matrix"
    );
    SimilarityMatrix::from_vectors(&vectors)
}

/// Compute-on-load indexer: parse the CSV source and build the matrix live.
#[derive(Debug, Clone)]
pub struct ComputeIndexer {
    catalog_path: PathBuf,
    config: VectorizerConfig,
}

impl ComputeIndexer {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            config: VectorizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: VectorizerConfig) -> Self {
        self.config = config;
        self
    }
}

impl CatalogIndexer for ComputeIndexer {
    fn load(&self) -> Result<(Catalog, SimilarityMatrix)> {
        let catalog = load_catalog(&self.catalog_path)?;
        let matrix = build_matrix(&catalog, &self.config);
        Ok((catalog, matrix))
    }
}

/// Load-precomputed indexer: read an `IndexArtifact` written by an earlier
/// run instead of recomputing the matrix.
#[derive(Debug, Clone)]
pub struct PrecomputedIndexer {
    artifact_path: PathBuf,
}

impl PrecomputedIndexer {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }
}

impl CatalogIndexer for PrecomputedIndexer {
    fn load(&self) -> Result<(Catalog, SimilarityMatrix)> {
        let artifact = IndexArtifact::read(&self.artifact_path)?;
        info!(
            movies = artifact.catalog.len(),
            path = %self.artifact_path.display(),
            "Loaded precomputed index artifact"
        );
        Ok((artifact.catalog, artifact.matrix))
    }
}

/// On-disk form of a built index: the catalog and its matrix together, so
/// the precomputed path needs no access to the original CSV.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexArtifact {
    pub catalog: Catalog,
    pub matrix: SimilarityMatrix,
}

impl IndexArtifact {
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> Self {
        Self { catalog, matrix }
    }

    /// Read and validate an artifact from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|_| IndexError::ArtifactNotFound {
            path: path.display().to_string(),
        })?;
        let artifact: IndexArtifact = serde_json::from_reader(BufReader::new(file))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Write the artifact as JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Check that catalog and matrix agree on dimensions.
    fn validate(&self) -> Result<()> {
        if !self.matrix.is_well_formed() || self.matrix.len() != self.catalog.len() {
            return Err(IndexError::DimensionMismatch {
                movies: self.catalog.len(),
                rows: self.matrix.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Movie;

    fn sample_catalog() -> Catalog {
        Catalog::from_movies(vec![
            Movie {
                title: "Toy Story".to_string(),
                genres: "Animation Comedy".to_string(),
            },
            Movie {
                title: "Saw".to_string(),
                genres: "Horror".to_string(),
            },
        ])
    }

    #[test]
    fn test_build_matrix_dimensions() {
        let catalog = sample_catalog();
        let matrix = build_matrix(&catalog, &VectorizerConfig::default());
        assert_eq!(matrix.len(), catalog.len());
        assert!(matrix.is_well_formed());
    }

    #[test]
    fn test_build_matrix_is_deterministic() {
        let catalog = sample_catalog();
        let config = VectorizerConfig::default();
        // Bit-identical across runs over identical input
        assert_eq!(build_matrix(&catalog, &config), build_matrix(&catalog, &config));
    }

    #[test]
    fn test_artifact_round_trip() {
        let catalog = sample_catalog();
        let matrix = build_matrix(&catalog, &VectorizerConfig::default());
        let artifact = IndexArtifact::new(catalog.clone(), matrix.clone());

        let path = std::env::temp_dir().join("cine-match-test-artifact.json");
        artifact.write(&path).unwrap();

        let loaded = IndexArtifact::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.catalog.len(), catalog.len());
        assert_eq!(loaded.matrix, matrix);
    }

    #[test]
    fn test_artifact_dimension_mismatch_is_rejected() {
        let catalog = sample_catalog();
        let matrix = build_matrix(&catalog, &VectorizerConfig::default());

        // One-movie catalog paired with a 2x2 matrix
        let bad = IndexArtifact {
            catalog: Catalog::from_movies(vec![Movie {
                title: "Lonely".to_string(),
                genres: "Drama".to_string(),
            }]),
            matrix,
        };
        assert!(matches!(bad.validate(), Err(IndexError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_missing_artifact() {
        let err = PrecomputedIndexer::new("does/not/exist.json").load().unwrap_err();
        assert!(matches!(err, IndexError::ArtifactNotFound { .. }));
    }
}
