//! Trait abstraction over the text-generation service so the adapter can be
//! tested without network access

use super::error::GenerationError;
use async_trait::async_trait;
use serde_json::Value;

/// One prompt sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    /// When set the backend must answer with JSON matching this schema
    pub response_schema: Option<Value>,
    /// Ask the model to skip its reasoning phase (used for short ideas)
    pub disable_thinking: bool,
}

impl GenerationRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
            disable_thinking: false,
        }
    }

    pub fn json(model: impl Into<String>, prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            response_schema: Some(schema),
            ..Self::text(model, prompt)
        }
    }

    pub fn without_thinking(mut self) -> Self {
        self.disable_thinking = true;
        self
    }
}

/// Text-generation backend returning the raw response text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
