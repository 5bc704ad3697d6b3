//! All AI/LLM functionality

pub mod client;
pub mod summarizer;

// Re-export main types for convenience
pub use client::{GeminiClient, GenerativeModel, estimate_tokens};
pub use summarizer::Summarizer;
