//! Itinerary generation through the Gemini `generateContent` REST API.
//!
//! Failures never propagate: callers get `None` and the error is logged.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::ItineraryConfig;

const SYSTEM_INSTRUCTION: &str = "You are a luxury travel concierge for Roots&Routes.";

#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Generated itinerary text, or `None` on any failure
    async fn generate_itinerary(&self, preferences: &str) -> Option<String>;
}

#[derive(Debug, thiserror::Error)]
enum ItineraryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Status { status: reqwest::StatusCode, body: Value },
    #[error("response contained no text")]
    EmptyResponse,
}

pub struct GeminiItineraryClient {
    config: ItineraryConfig,
    client: reqwest::Client,
}

impl GeminiItineraryClient {
    pub fn new(config: ItineraryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn request_body(preferences: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }],
            },
            "contents": [{
                "role": "user",
                "parts": [{
                    "text": format!("Generate a 3-day luxury itinerary for Sicily based on: {}", preferences),
                }],
            }],
        })
    }

    async fn try_generate(&self, preferences: &str) -> Result<String, ItineraryError> {
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&Self::request_body(preferences))
            .send()
            .await?;

        let status = resp.status();
        let data: Value = resp.json().await?;
        if !status.is_success() {
            return Err(ItineraryError::Status { status, body: data });
        }

        extract_text(&data).ok_or(ItineraryError::EmptyResponse)
    }
}

#[async_trait]
impl ItineraryGenerator for GeminiItineraryClient {
    async fn generate_itinerary(&self, preferences: &str) -> Option<String> {
        match self.try_generate(preferences).await {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("❌ Error generating itinerary: {}", e);
                None
            }
        }
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(data: &Value) -> Option<String> {
    let text: String = data["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ItineraryConfig {
        ItineraryConfig {
            api_key: "test-key".into(),
            model: "test-model".into(),
            base_url: base_url.into(),
        }
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiItineraryClient::new(config("https://example.com"));
        assert_eq!(
            client.endpoint(),
            "https://example.com/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_request_body() {
        let body = GeminiItineraryClient::request_body("food and boats");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], SYSTEM_INSTRUCTION);
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Generate a 3-day luxury itinerary for Sicily based on: food and boats"
        );
    }

    #[test]
    fn test_extract_text() {
        let data = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Day 1: Palermo. " }, { "text": "Day 2: Cefalù." }] }
            }]
        });
        assert_eq!(extract_text(&data).as_deref(), Some("Day 1: Palermo. Day 2: Cefalù."));

        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&json!({ "error": { "code": 400 } })), None);
        let empty = json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] });
        assert_eq!(extract_text(&empty), None);
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_none() {
        // nothing listens on the discard port
        let client = GeminiItineraryClient::new(config("http://127.0.0.1:9"));
        assert_eq!(client.generate_itinerary("anything").await, None);
    }
}
