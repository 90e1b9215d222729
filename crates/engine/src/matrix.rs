//! Pairwise similarity matrix.
//!
//! Dense, row-major N×N storage of cosine similarity between every pair of
//! feature vectors. Built once at startup (or loaded from a precomputed
//! artifact) and treated as immutable, shared read-only state afterwards.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Precomputed pairwise content-similarity scores between all catalog rows.
///
/// Invariants:
/// - symmetric: `get(i, j) == get(j, i)`
/// - scores in [0, 1]
/// - `get(i, i)` is the maximum score attainable for row i (1.0 unless the
///   row's feature vector is zero, in which case the whole row is 0.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the matrix from l2-normalized feature vectors.
    ///
    /// Cosine similarity of normalized vectors is a plain dot product, and
    /// the per-term products commute exactly in IEEE arithmetic, so the
    /// result is symmetric even though each row is computed independently.
    /// Rows are computed in parallel with rayon.
    pub fn from_vectors(vectors: &[Vec<f64>]) -> Self {
        let n = vectors.len();
        let rows: Vec<Vec<f64>> = vectors
            .par_iter()
            .map(|vi| vectors.iter().map(|vj| dot(vi, vj)).collect())
            .collect();
        let values = rows.into_iter().flatten().collect();

        Self { n, values }
    }

    /// Number of rows (= catalog size)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity score between rows i and j
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "matrix index out of range");
        self.values[i * self.n + j]
    }

    /// Full similarity row for catalog index i
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Validate that the stored dimensions are consistent (used when loading
    /// a precomputed artifact from untrusted storage).
    pub fn is_well_formed(&self) -> bool {
        self.values.len() == self.n * self.n
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::{Vectorizer, VectorizerConfig};

    fn build(docs: &[&str]) -> SimilarityMatrix {
        let vectorizer = Vectorizer::fit(docs, VectorizerConfig::default());
        let vectors: Vec<Vec<f64>> = docs.iter().map(|d| vectorizer.transform(d)).collect();
        SimilarityMatrix::from_vectors(&vectors)
    }

    #[test]
    fn test_symmetry() {
        let m = build(&["animation comedy", "comedy drama", "horror", "drama romance"]);
        for i in 0..m.len() {
            for j in 0..m.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_diagonal_is_row_maximum() {
        let m = build(&["animation comedy", "comedy", "horror thriller", ""]);
        for i in 0..m.len() {
            let row_max = m.row(i).iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(m.get(i, i), row_max);
        }
    }

    #[test]
    fn test_scores_are_bounded() {
        let m = build(&["action adventure", "action", "comedy romance"]);
        for i in 0..m.len() {
            for j in 0..m.len() {
                let s = m.get(i, j);
                assert!((0.0..=1.0 + 1e-12).contains(&s), "score out of range: {s}");
            }
        }
    }

    #[test]
    fn test_zero_vector_row_is_all_zero() {
        // Empty genre text yields a zero vector, so the whole row is 0.0,
        // including the diagonal (sklearn behaves the same way)
        let m = build(&["action", ""]);
        assert!(m.row(1).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_disjoint_genres_score_zero() {
        let m = build(&["horror", "comedy"]);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_empty_matrix() {
        let m = SimilarityMatrix::from_vectors(&[]);
        assert!(m.is_empty());
        assert!(m.is_well_formed());
    }
}
