//! LLM (Gemini) API client module
//!
//! Encapsulates the outbound `generateContent` call used for summaries.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::errors::AnalyzeError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// A hosted model that turns one prompt into one block of text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_name(&self) -> &str;

    /// Performs exactly one generation call.
    ///
    /// # Errors
    ///
    /// [`AnalyzeError::Api`] when the service rejects the request,
    /// [`AnalyzeError::Unexpected`] for anything else.
    async fn generate(&self, prompt: &str) -> Result<String, AnalyzeError>;
}

/// Gemini REST client. Built once at startup and shared read-only.
pub struct GeminiClient {
    http: Client,
    api_key: HeaderValue,
    model_name: String,
    endpoint: Url,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// # Errors
    ///
    /// Fails when the key is blank or not a valid header value, when the base
    /// URL does not parse, or when the HTTP client cannot be built.
    pub fn new(
        api_key: &str,
        model_name: &str,
        api_base: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, AnalyzeError> {
        if api_key.trim().is_empty() {
            return Err(AnalyzeError::ServiceUnavailable);
        }

        let mut key_value = HeaderValue::from_str(api_key.trim())
            .map_err(|e| AnalyzeError::Unexpected(format!("Invalid API key header: {e}")))?;
        key_value.set_sensitive(true);

        let endpoint = generate_content_url(api_base, model_name)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            AnalyzeError::Unexpected(format!("Failed to build Gemini HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key: key_value,
            model_name: model_name.to_string(),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, prompt: &str) -> Result<String, AnalyzeError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        info!(
            model = %self.model_name,
            "Requesting summary, estimated input tokens: {}",
            estimate_tokens(prompt)
        );

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", self.api_key.clone())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalyzeError::Unexpected(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(AnalyzeError::Api(describe_api_error(status, &error_text)));
        }

        let body = response.bytes().await?;
        debug!("Gemini response body is {} bytes", body.len());
        parse_generate_response(&body)
    }
}

fn generate_content_url(api_base: &str, model_name: &str) -> Result<Url, AnalyzeError> {
    let mut base = Url::parse(api_base.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("v1beta/models/{model_name}:generateContent"))?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Joins the text parts of the first candidate, skipping thought parts.
pub(crate) fn parse_generate_response(body: &[u8]) -> Result<String, AnalyzeError> {
    let parsed: GenerateContentResponse = serde_json::from_slice(body)?;

    if let Some(candidate) = parsed.candidates.first() {
        let texts: Vec<&str> = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();
        if !texts.is_empty() {
            return Ok(texts.concat());
        }
        if let Some(reason) = &candidate.finish_reason {
            return Err(AnalyzeError::Unexpected(format!(
                "Model returned no text (finish reason: {reason})"
            )));
        }
    }

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AnalyzeError::Unexpected(format!(
            "Prompt was blocked by the model (reason: {reason})"
        )));
    }

    Err(AnalyzeError::Unexpected("No text in model response".to_string()))
}

/// Renders an upstream error body as `"<code> <STATUS>. <message>"` when it is
/// the standard Google error envelope, otherwise passes the body through.
pub(crate) fn describe_api_error(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        code: Option<u16>,
        message: Option<String>,
        status: Option<String>,
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        let code = envelope.error.code.unwrap_or_else(|| status.as_u16());
        let label = envelope
            .error
            .status
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
        let message = envelope.error.message.unwrap_or_default();
        return format!("{code} {label}. {message}");
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{} {body}", status.as_u16())
    }
}
