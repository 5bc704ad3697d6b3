use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::helpers::err_response;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("No file part in the request")]
    MissingFile,

    #[error("No selected file or file is not a PDF")]
    InvalidFile,

    #[error("Uploaded file exceeds the 32 MiB limit")]
    PayloadTooLarge,

    #[error("Could not extract text from the PDF. It may be an image-only PDF or corrupted.")]
    ExtractionFailed,

    #[error("AI Service not initialized. Check API Key in .env file.")]
    ServiceUnavailable,

    #[error("AI API Error: {0}")]
    Api(String),

    #[error("An unexpected server error occurred: {0}")]
    Unexpected(String),
}

impl AnalyzeError {
    /// HTTP status the handler answers with for this failure.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingFile | AnalyzeError::InvalidFile => StatusCode::BAD_REQUEST,
            AnalyzeError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AnalyzeError::ExtractionFailed
            | AnalyzeError::ServiceUnavailable
            | AnalyzeError::Api(_)
            | AnalyzeError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        err_response(self.status_code(), &self.to_string())
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(error: reqwest::Error) -> Self {
        AnalyzeError::Unexpected(error.to_string())
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(error: serde_json::Error) -> Self {
        AnalyzeError::Unexpected(format!("Failed to decode model response: {error}"))
    }
}

impl From<url::ParseError> for AnalyzeError {
    fn from(error: url::ParseError) -> Self {
        AnalyzeError::Unexpected(format!("Invalid API URL: {error}"))
    }
}

impl From<tokio::task::JoinError> for AnalyzeError {
    fn from(error: tokio::task::JoinError) -> Self {
        AnalyzeError::Unexpected(error.to_string())
    }
}

/// Why a PDF produced no text. Only ever logged; callers see an empty string.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse PDF: {0}")]
    Malformed(String),

    #[error("PDF parser panicked (malformed document)")]
    Panicked,

    #[error("PDF has {pages} page(s) but no extractable text")]
    NoText { pages: usize },
}
