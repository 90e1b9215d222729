//! TMDB configuration loaded from environment variables.
//!
//! One required value (the API key) and one defaulted value (the base URL).
//! Loaded via dotenvy + envy so a local `.env` file works the same as real
//! environment variables. A missing key fails fast with a clear error
//! instead of silently degrading every detail fetch.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key (required)
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,
}

fn default_tmdb_api_url() -> String {
    tmdb_client::DEFAULT_API_URL.to_string()
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| {
            anyhow::anyhow!("Failed to load TMDB config (is TMDB_API_KEY set?): {}", e)
        })
    }
}
