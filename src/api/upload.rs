use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::core::models::UploadedFile;
use crate::errors::AnalyzeError;

/// Name of the multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Reads the first `file` part of the form into memory. Other fields are
/// skipped.
///
/// # Errors
///
/// [`AnalyzeError::MissingFile`] when no `file` part exists or the body is
/// not readable multipart, [`AnalyzeError::PayloadTooLarge`] when the body
/// limit is hit while reading.
pub async fn read_file_part(mut multipart: Multipart) -> Result<UploadedFile, AnalyzeError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping form field {:?}", field.name());
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?.to_vec();
        debug!("Received file part {:?} ({} bytes)", filename, data.len());

        return Ok(UploadedFile { filename, data });
    }

    Err(AnalyzeError::MissingFile)
}

fn multipart_error(error: MultipartError) -> AnalyzeError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AnalyzeError::PayloadTooLarge
    } else {
        warn!("Failed to read multipart body: {}", error.body_text());
        AnalyzeError::MissingFile
    }
}
