use serde::{Deserialize, Serialize};

/// A file received in the `file` part of an upload. Lives for one request.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// True when a filename was given and it ends in `.pdf`, ignoring case.
    /// The bytes are not inspected.
    #[must_use]
    pub fn has_pdf_name(&self) -> bool {
        !self.filename.is_empty() && self.filename.to_lowercase().ends_with(".pdf")
    }
}

/// Body of a successful `/analyze` response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub status: String,
    pub filename: String,
    pub analysis: String,
}

impl AnalysisResponse {
    #[must_use]
    pub fn success(filename: String, analysis: String) -> Self {
        Self {
            status: "success".to_string(),
            filename,
            analysis,
        }
    }
}
