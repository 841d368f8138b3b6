//! Client for the Google generative-language API (AgriBot assistant).
//!
//! A thin pass-through: one static agronomy system prompt, no streaming,
//! no conversation state. Callers serve [`FALLBACK_REPLY`] whenever this
//! client errors, including when no API key is configured.

use reqwest::Client;
use serde::Deserialize;

use crate::models::chat::ChatMessage;

/// Static system prompt for the agricultural assistant.
pub const SYSTEM_PROMPT: &str = concat!(
    "You are AgriBot, an intelligent agricultural assistant helping farmers ",
    "with crop management, soil health and fertilizers, pest and disease ",
    "identification, weather-related advice, irrigation, harvest timing, ",
    "and market guidance. Provide practical, actionable advice for small ",
    "to medium farmers, prefer sustainable and cost-effective solutions, ",
    "and include safety precautions when recommending chemicals. Use simple ",
    "language. Focus on Indian agricultural practices, crops commonly grown ",
    "in India, and local examples where possible.",
);

/// Canned reply served when the provider is unreachable or unconfigured.
pub const FALLBACK_REPLY: &str = concat!(
    "Sorry, I'm having trouble connecting to the AI model right now. ",
    "Please try again in a few moments.",
);

pub struct AssistantClient {
    http: Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl AssistantClient {
    pub fn new(api_base: String, api_key: Option<String>, model: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            api_key,
            model,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send the conversation to the provider and return the first
    /// candidate's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|m| {
                // The provider only knows "user" and "model" roles.
                let role = if m.role.eq_ignore_ascii_case("assistant") {
                    "model"
                } else {
                    "user"
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": m.content }],
                })
            })
            .collect();

        let request_body = serde_json::json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
            "contents": contents,
        });

        let response = self
            .http
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AssistantError::EmptyResponse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("GOOGLE_AI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned no usable candidates")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_client_errors_before_any_request() {
        let client = AssistantClient::new(
            "https://generativelanguage.googleapis.com".to_string(),
            None,
            "gemini-2.5-flash".to_string(),
        );
        assert!(!client.is_configured());

        let messages = [ChatMessage {
            role: "user".to_string(),
            content: "When should I sow wheat?".to_string(),
        }];
        let err = client.complete(&messages).await.unwrap_err();
        assert!(matches!(err, AssistantError::MissingApiKey));
    }
}
