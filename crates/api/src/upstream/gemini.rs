//! Summary generation against the Gemini `generateContent` REST endpoint.

use serde::Deserialize;
use serde_json::json;

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};
use crate::upstream::{success_body, upstream_failure};

/// Instruction prepended to the user's content.
pub const SUMMARY_PROMPT: &str =
    "Summarize the following content in 2-3 concise sentences. Return only the summary.";

/// Client for one Gemini model, authenticated with the server-held key.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// Build a client from config. Returns `None` when no API key is set.
    pub fn from_config(client: reqwest::Client, config: &GeminiConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }

    /// Ask the model for a short summary of `content`.
    pub async fn summarize(&self, content: &str) -> AppResult<String> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": format!("{SUMMARY_PROMPT}\n\n{content}") }]
            }]
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_failure(response, "Failed to generate summary").await);
        }

        let value = success_body(response).await?;
        let parsed: GenerateContentResponse = serde_json::from_value(value)
            .map_err(|e| AppError::Transport(format!("Unexpected Gemini response: {e}")))?;

        extract_text(parsed)
            .ok_or_else(|| AppError::Transport("Gemini response contained no text".into()))
    }
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
