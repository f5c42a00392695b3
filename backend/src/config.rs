use anyhow::Context;
use std::env;

pub const DEFAULT_ITINERARY_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ITINERARY_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the itinerary generation client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItineraryConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl ItineraryConfig {
    /// Read `API_KEY`, `ITINERARY_MODEL` and `ITINERARY_BASE_URL`, loading
    /// a `.env` file first when one exists
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("API_KEY is not set")?;

        Ok(Self {
            api_key,
            model: lookup("ITINERARY_MODEL").unwrap_or_else(|| DEFAULT_ITINERARY_MODEL.to_string()),
            base_url: lookup("ITINERARY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ITINERARY_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
