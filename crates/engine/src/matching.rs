//! Fuzzy title matching.
//!
//! Approximate string matching between free-text user input and known
//! catalog titles, tolerating minor spelling and formatting differences.
//! Implemented as stateless functions of immutable inputs.
//!
//! The matcher uses a normalized Levenshtein similarity ratio over trimmed,
//! lowercased strings. The acceptance threshold is configuration with a
//! documented default of 0.6, the cutoff the similarity scores were tuned
//! against, rather than a hard-coded "correct" value.

use strsim::normalized_levenshtein;

/// Default acceptance threshold for a fuzzy match (similarity ratio in
/// [0, 1]; candidates below this are rejected).
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Default number of candidates returned by [`close_matches`].
pub const DEFAULT_MAX_MATCHES: usize = 3;

/// Tunable matching parameters.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum similarity ratio for a candidate to be accepted
    pub threshold: f64,
    /// Maximum number of candidates returned by [`close_matches`]
    pub max_matches: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }
}

/// Find the catalog titles closest to `query`.
///
/// Returns up to `config.max_matches` `(index, score)` pairs scoring at or
/// above the threshold, best first; ties keep ascending index order (stable
/// sort). An empty or whitespace-only query matches nothing.
pub fn close_matches<'a, I>(query: &str, titles: I, config: &MatchConfig) -> Vec<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f64)> = titles
        .into_iter()
        .enumerate()
        .map(|(idx, title)| (idx, normalized_levenshtein(&query, &title.to_lowercase())))
        .filter(|&(_, score)| score >= config.threshold)
        .collect();

    // Stable sort: equal scores preserve catalog order
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(config.max_matches);
    candidates
}

/// The single best match above the acceptance threshold, if any.
pub fn best_match<'a, I>(query: &str, titles: I, config: &MatchConfig) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    close_matches(query, titles, config).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &["Toy Story", "Shrek", "Saw", "Toy Story 2"];

    #[test]
    fn test_case_and_spacing_variant_matches() {
        let (idx, score) = best_match("  toy story ", TITLES.iter().copied(), &MatchConfig::default()).unwrap();
        assert_eq!(idx, 0);
        assert!(score > 0.99);
    }

    #[test]
    fn test_misspelling_matches() {
        let (idx, _) = best_match("shrek!", TITLES.iter().copied(), &MatchConfig::default()).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_no_close_match() {
        assert!(best_match("Xyzabc123", TITLES.iter().copied(), &MatchConfig::default()).is_none());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(best_match("", TITLES.iter().copied(), &MatchConfig::default()).is_none());
        assert!(best_match("   ", TITLES.iter().copied(), &MatchConfig::default()).is_none());
    }

    #[test]
    fn test_close_matches_orders_best_first() {
        let matches = close_matches("toy story", TITLES.iter().copied(), &MatchConfig::default());
        assert_eq!(matches[0].0, 0);
        // "Toy Story 2" still clears the threshold, behind the exact match
        assert!(matches.iter().any(|&(idx, _)| idx == 3));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let titles = ["Heat", "Heat"];
        let matches = close_matches("heat", titles.iter().copied(), &MatchConfig::default());
        assert_eq!(matches[0].0, 0);
        assert_eq!(matches[1].0, 1);
    }
}
