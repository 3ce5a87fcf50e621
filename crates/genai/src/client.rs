//! HTTP client for the Google Generative Language API.
//!
//! [`GeminiClient`] holds the endpoint configuration for one model and
//! exposes [`generate_content`](GeminiClient::generate_content), which
//! sends a single text prompt and returns the first candidate's text.

use serde::{Deserialize, Serialize};

/// Default API host; override for self-hosted proxies and tests.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Errors from the generative-language client.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// The API answered 2xx but produced no usable candidate text.
    #[error("Empty response from model")]
    EmptyResponse,

    /// The candidate text did not decode into valid itinerary items.
    #[error("Decode error: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Configuration handle for one generative-language model endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client.
    ///
    /// * `api_key`  - API key appended as the `key` query parameter.
    /// * `base_url` - API host, no trailing slash (see [`DEFAULT_BASE_URL`]).
    /// * `model`    - model name (see [`DEFAULT_MODEL`]).
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    /// Send one text prompt and return the first candidate's text,
    /// with multi-part candidates concatenated in order.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GenAiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenAiError::Api(format!("model endpoint returned {status}")));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenAiError::EmptyResponse);
        }

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            "Received model candidate"
        );
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
