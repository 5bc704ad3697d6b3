//! Document summarization on top of a [`GenerativeModel`].

use std::sync::Arc;

use tracing::info;

use super::client::GenerativeModel;
use crate::errors::AnalyzeError;
use crate::prompt::build_summary_prompt;

/// Shared, read-only summarization handle.
#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn GenerativeModel>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl Summarizer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Summarizes `text` with a single model call and returns the model
    /// output verbatim.
    ///
    /// # Errors
    ///
    /// Propagates the model's [`AnalyzeError::Api`] or
    /// [`AnalyzeError::Unexpected`] unchanged.
    pub async fn summarize(&self, text: &str) -> Result<String, AnalyzeError> {
        let prompt = build_summary_prompt(text);
        info!(
            model = %self.model.model_name(),
            "Summarizing {} document characters ({} prompt bytes)",
            text.chars().count(),
            prompt.len()
        );
        self.model.generate(&prompt).await
    }
}
