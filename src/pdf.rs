//! PDF text extraction
//!
//! Uses [`pdf_extract`] on in-memory bytes. The library can panic on
//! malformed input instead of returning an error, so every call goes through
//! [`std::panic::catch_unwind`].

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::errors::ExtractError;

/// Extracts the text of every page, in document order.
///
/// # Errors
///
/// Returns [`ExtractError::Malformed`] or [`ExtractError::Panicked`] when the
/// bytes cannot be parsed, and [`ExtractError::NoText`] when parsing worked
/// but no page carries any text (blank or image-only documents).
pub fn extract_pages(file_bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(file_bytes)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(ExtractError::Malformed(e.to_string())),
        Err(_) => return Err(ExtractError::Panicked),
    };

    debug!("Parsed PDF with {} page(s)", pages.len());

    if pages.iter().all(|page| page.trim().is_empty()) {
        return Err(ExtractError::NoText { pages: pages.len() });
    }

    Ok(pages)
}

/// Concatenates the text of all pages into one string.
///
/// Never fails: any extraction problem is logged and reported as an empty
/// string, which callers treat as the single failure signal.
#[must_use]
pub fn extract_text(file_bytes: &[u8]) -> String {
    match extract_pages(file_bytes) {
        Ok(pages) => pages.concat(),
        Err(e) => {
            warn!("Error extracting text: {}", e);
            String::new()
        }
    }
}
