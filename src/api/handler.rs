//! HTTP surface: upload page and the `/analyze` pipeline.
//!
//! `/analyze` runs one request through validation, text extraction and a
//! single summarization call. Every failure is turned into a JSON error body
//! by [`AnalyzeError`]'s `IntoResponse` impl.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::AppState;
use super::upload;
use crate::core::models::{AnalysisResponse, UploadedFile};
use crate::errors::AnalyzeError;
use crate::pdf;

/// Maximum accepted request body (32 MiB)
pub const MAX_CONTENT_LENGTH: usize = 32 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Assembles the application router around the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(MAX_CONTENT_LENGTH))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serves the upload form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tracing::instrument(
    level = "info",
    skip_all,
    fields(request_id = %Uuid::new_v4(), filename = tracing::field::Empty)
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match run_analysis(&state, multipart).await {
        Ok(result) => {
            info!("Analysis completed ({} characters)", result.analysis.len());
            Json(result).into_response()
        }
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!("Rejected upload: {}", e);
            } else {
                error!("Analysis failed: {}", e);
            }
            e.into_response()
        }
    }
}

async fn run_analysis(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisResponse, AnalyzeError> {
    let multipart = multipart.map_err(|e| {
        warn!("Request has no multipart body: {}", e);
        AnalyzeError::MissingFile
    })?;

    let file = upload::read_file_part(multipart).await?;
    tracing::Span::current().record("filename", file.filename.as_str());

    if !file.has_pdf_name() {
        return Err(AnalyzeError::InvalidFile);
    }

    let UploadedFile { filename, data } = file;
    info!("Extracting text from {} bytes", data.len());
    let document_text = tokio::task::spawn_blocking(move || pdf::extract_text(&data)).await?;

    if document_text.trim().is_empty() {
        return Err(AnalyzeError::ExtractionFailed);
    }

    let summarizer = state
        .summarizer
        .as_ref()
        .ok_or(AnalyzeError::ServiceUnavailable)?;

    let analysis = summarizer.summarize(&document_text).await?;

    Ok(AnalysisResponse::success(filename, analysis))
}
