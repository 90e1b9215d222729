//! TMDB detail-fetcher.
//!
//! External collaborator that enriches a recommended title with poster,
//! rating, and overview data for display. One outbound HTTPS request per
//! title against TMDB's `/search/movie` endpoint; the first search result
//! wins. No retries, no rate-limit handling, no pagination.
//!
//! Failure model: a non-success HTTP status or an empty result set yields an
//! all-absent [`MovieDetails`] rather than an error, so a single title's
//! display degrades without affecting the rest. Transport and decode
//! failures surface as [`TmdbError`] and are recovered per item by the
//! caller.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// TMDB v3 API base URL.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for poster images at the width the grid renders.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Bound on each outbound request, so one slow fetch cannot hang the whole
/// rendering loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the detail-fetch call.
///
/// Non-fatal by design: the caller omits the poster/rating/overview for the
/// affected title and keeps rendering.
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TmdbError>;

/// Display data for one recommended title. Every field is optional; an
/// all-absent value means the title is shown bare.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
    pub overview: Option<String>,
}

/// First-result shape of TMDB's search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    poster_path: Option<String>,
    vote_average: Option<f64>,
    overview: Option<String>,
}

/// Thin client over the TMDB search endpoint.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbClient {
    /// Create a client with the default API URL and request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client against a non-default base URL (used by tests).
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        })
    }

    /// Fetch poster/rating/overview for one title.
    ///
    /// Returns all-absent details on any non-success HTTP status or when the
    /// search comes back empty; `Err` only for transport/decode failures.
    pub async fn fetch_details(&self, title: &str) -> Result<MovieDetails> {
        let url = format!("{}/search/movie", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(title, status = %response.status(), "TMDB search returned non-success status");
            return Ok(MovieDetails::default());
        }

        let data: SearchResponse = response.json().await?;
        Ok(details_from_response(data))
    }
}

/// Map the first search result (if any) to display details.
fn details_from_response(response: SearchResponse) -> MovieDetails {
    let Some(first) = response.results.into_iter().next() else {
        return MovieDetails::default();
    };

    MovieDetails {
        poster_url: first
            .poster_path
            .map(|path| format!("{IMAGE_BASE_URL}{path}")),
        rating: first.vote_average,
        overview: first.overview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_is_mapped() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "results": [
                    {
                        "poster_path": "/abc.jpg",
                        "vote_average": 7.9,
                        "overview": "A cowboy doll is threatened."
                    },
                    {
                        "poster_path": "/other.jpg",
                        "vote_average": 5.0,
                        "overview": "Not this one."
                    }
                ]
            }"#,
        )
        .unwrap();

        let details = details_from_response(response);
        assert_eq!(
            details.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(details.rating, Some(7.9));
        assert_eq!(details.overview.as_deref(), Some("A cowboy doll is threatened."));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [{"poster_path": null}]}"#).unwrap();

        let details = details_from_response(response);
        assert_eq!(details.poster_url, None);
        assert_eq!(details.rating, None);
        assert_eq!(details.overview, None);
    }

    #[test]
    fn test_empty_result_set_is_all_absent() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(details_from_response(response), MovieDetails::default());
    }

    #[test]
    fn test_missing_results_key_is_all_absent() {
        let response: SearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(details_from_response(response), MovieDetails::default());
    }
}
