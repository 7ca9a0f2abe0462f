//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:02:26 Saturday
//! brief:

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("recipe request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("recipe API answered {status} for {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("recipe API returned no recipes")]
    NoRecipe,
    #[error("unusable calorie value for recipe {recipe_id}: {raw}")]
    Calories { recipe_id: u64, raw: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("an API key is required (--api-key or SPOONACULAR_API_KEY)")]
    MissingApiKey,
    #[error("invalid API base URL {url:?}: {reason}")]
    ApiBase { url: String, reason: &'static str },
    #[error("reveal delay must be at most {max} ms, got {got}")]
    RevealDelay { got: u64, max: u64 },
    #[error("request timeout must be at least one second")]
    Timeout,
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
