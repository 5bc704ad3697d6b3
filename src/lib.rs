//! docsum - summarizes uploaded PDF documents with a hosted LLM.
//!
//! A single HTTP service: `POST /analyze` takes a multipart upload, extracts
//! the PDF's text, asks Gemini for a short summary plus key takeaways, and
//! returns the model output as JSON. `GET /` serves an upload form.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP listener and multipart parsing
//! - pdf-extract for in-memory text extraction
//! - reqwest for the Gemini `generateContent` REST call
//! - Tokio for async runtime
//!
//! Nothing is persisted; the only shared object is the read-only client
//! handle held in [`api::AppState`].
//!
//! # Example
//!
//! ```no_run
//! use docsum::api::{AppState, build_router};
//! use docsum::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     docsum::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let addr = config.bind_addr();
//!     let app = build_router(AppState::from_config(config));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pdf;
pub mod prompt;

/// Configure structured JSON logging.
///
/// Sets up tracing-subscriber with a JSON formatter and an `EnvFilter` taken
/// from `RUST_LOG` (default `info`). Calling it more than once is harmless;
/// later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
