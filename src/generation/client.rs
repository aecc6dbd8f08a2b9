//! HTTP client for the Google Generative Language API
//!
//! Only the `generateContent` call is used. Structured output is requested
//! through `generationConfig.responseSchema`, and the text of the first
//! candidate is returned untouched for the adapter to parse.

use super::error::GenerationError;
use super::traits::{GenerationBackend, GenerationRequest};
use crate::config::WizardConfig;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST backend
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_config(config: &WizardConfig) -> Result<Self, GenerationError> {
        Self::new(
            config.endpoint(),
            config.api_key.clone(),
            config.request_timeout(),
        )
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

impl GenerateContentBody {
    fn from_request(request: GenerationRequest) -> Self {
        let mut config = GenerationConfig::default();
        if let Some(schema) = request.response_schema {
            config.response_mime_type = Some("application/json");
            config.response_schema = Some(schema);
        }
        if request.disable_thinking {
            config.thinking_config = Some(ThinkingConfig { thinking_budget: 0 });
        }
        let has_config = config.response_schema.is_some() || config.thinking_config.is_some();

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart {
                    text: request.prompt,
                }],
            }],
            generation_config: has_config.then_some(config),
        }
    }
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate, skipping thought parts
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;
        let url = self.generate_url(&request.model);
        debug!(%url, structured = request.response_schema.is_some(), "Sending generateContent");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentBody::from_request(request))
            .send()
            .await
            .map_err(|e| GenerationError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "generateContent failed");
            return Err(GenerationError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let text = parsed.into_text();
        if text.trim().is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text)
    }
}
