//! Ranked similarity lookup.
//!
//! Given a free-text movie name, resolve it to a catalog row via fuzzy
//! matching, read that row of the similarity matrix, and return the top
//! titles by descending score. Pure functions of immutable inputs; absence
//! of a match is a normal empty-result path, not an error.

use catalog::{Catalog, MovieIndex};
use tracing::debug;

use crate::matching::{MatchConfig, best_match};
use crate::matrix::SimilarityMatrix;

/// Maximum number of titles returned per recommendation request.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// One recommended title with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTitle {
    pub index: MovieIndex,
    pub title: String,
    pub score: f64,
}

/// Recommend up to 10 titles similar to `query`.
///
/// Returns an empty vector when the query fuzzy-matches no known title
/// (including empty or whitespace input). Output length is
/// `min(10, N - 1)`; the resolved match itself is never included and no
/// index appears twice.
pub fn recommend(query: &str, catalog: &Catalog, matrix: &SimilarityMatrix) -> Vec<String> {
    recommend_ranked(query, catalog, matrix, &MatchConfig::default())
        .into_iter()
        .map(|r| r.title)
        .collect()
}

/// Like [`recommend`], but keeps catalog indices and similarity scores and
/// exposes the match configuration (used by the CLI for display).
pub fn recommend_ranked(
    query: &str,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    match_config: &MatchConfig,
) -> Vec<RankedTitle> {
    let Some((matched, ratio)) = best_match(query, catalog.titles(), match_config) else {
        debug!(query, "No catalog title cleared the match threshold");
        return Vec::new();
    };

    // Duplicate titles resolve to the first row by position, even when the
    // matcher happened to land on a later copy
    let matched_title = &catalog.get(matched).expect("match index is in range").title;
    let k = catalog
        .position_of_title(matched_title)
        .expect("matched title exists in catalog");

    debug!(query, matched = %matched_title, index = k, ratio, "Resolved fuzzy match");
    rank_similar(k, catalog, matrix, MAX_RECOMMENDATIONS)
}

/// Read row `k` of the matrix and return the `limit` most similar other
/// rows, descending by score, ties by ascending catalog index.
fn rank_similar(
    k: MovieIndex,
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    limit: usize,
) -> Vec<RankedTitle> {
    let mut scored: Vec<(MovieIndex, f64)> = matrix.row(k).iter().copied().enumerate().collect();

    // Vec::sort_by is stable, so equal scores keep ascending index order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    // Filter k out explicitly rather than dropping the head entry: a movie
    // with identical genre text and a lower index ties the diagonal at 1.0
    // and would otherwise push the match itself into the results
    scored
        .into_iter()
        .filter(|&(i, _)| i != k)
        .take(limit)
        .map(|(i, score)| RankedTitle {
            index: i,
            title: catalog.get(i).expect("matrix row matches catalog size").title.clone(),
            score,
        })
        .collect()
}
