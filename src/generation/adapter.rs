//! Ideate / extract / compose on top of a [`GenerationBackend`]

use super::error::GenerationError;
use super::traits::{GenerationBackend, GenerationRequest};
use super::{prompts, schema};
use crate::state::{Competencies, GeneratedDocument, IdeaContext, IdeaKind, LessonForm};
use std::sync::Arc;
use tracing::info;

/// Stateless request shaping and response validation. Cheap to clone into
/// spawned tasks.
#[derive(Clone)]
pub struct GenerationAdapter {
    backend: Arc<dyn GenerationBackend>,
    model: String,
}

impl GenerationAdapter {
    pub fn new(backend: Arc<dyn GenerationBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Short free-text suggestion for one inspiration field
    pub async fn ideate(&self, kind: IdeaKind, ctx: &IdeaContext) -> Result<String, GenerationError> {
        info!(kind = kind.key(), "Requesting idea");
        let request =
            GenerationRequest::text(&self.model, prompts::idea(kind, ctx)).without_thinking();
        let text = self.backend.generate(request).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }
        Ok(text.to_string())
    }

    /// Pull CP and TP out of pasted or imported text
    pub async fn extract(&self, raw_text: &str) -> Result<Competencies, GenerationError> {
        info!(chars = raw_text.chars().count(), "Requesting CP/TP extraction");
        let request = GenerationRequest::json(
            &self.model,
            prompts::extraction(raw_text),
            schema::competencies(),
        );
        let text = self.backend.generate(request).await?;
        Ok(serde_json::from_str(text.trim())?)
    }

    /// Request the full document for a validated form
    pub async fn compose(&self, form: &LessonForm) -> Result<GeneratedDocument, GenerationError> {
        info!(meetings = form.meeting_count(), "Requesting lesson plan");
        let text = self.backend.generate(self.compose_request(form)).await?;
        let document: GeneratedDocument = serde_json::from_str(text.trim())?;
        if document.pengalaman.is_empty() {
            return Err(GenerationError::Malformed(
                "pengalaman tidak memuat pertemuan".to_string(),
            ));
        }
        Ok(document)
    }

    /// Document request with the manual-major sentinel replaced by the typed text
    pub fn compose_request(&self, form: &LessonForm) -> GenerationRequest {
        GenerationRequest::json(
            &self.model,
            prompts::document(form, form.effective_major()),
            schema::document(),
        )
    }
}
