/// Maximum number of document characters sent to the model
pub const MAX_DOCUMENT_CHARS: usize = 8000;

/// Instructions placed ahead of the document body
pub const SUMMARY_INSTRUCTIONS: &str = "You are an expert document analyzer. \
Summarize the following document content.
Provide the output in the following format:
1. **Summary Paragraph**: A single, concise paragraph (max 100 words).
2. **Key Takeaways**: A list of 3-5 crucial bullet points.

DOCUMENT CONTENT:
---
";

/// Hard-truncates the document to its first `MAX_DOCUMENT_CHARS` characters.
/// Counts Unicode scalar values, so the cut may land mid-word but never
/// inside a multi-byte character.
pub fn truncate_document(text: &str) -> &str {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the summarization prompt around the (truncated) document text
pub fn build_summary_prompt(document_text: &str) -> String {
    let body = truncate_document(document_text);
    let mut prompt = String::with_capacity(SUMMARY_INSTRUCTIONS.len() + body.len() + 1);
    prompt.push_str(SUMMARY_INSTRUCTIONS);
    prompt.push_str(body);
    prompt.push('\n');
    prompt
}
