use std::sync::Arc;

use tracing::{info, warn};

use crate::ai::{GeminiClient, Summarizer};
use crate::core::config::AppConfig;

/// Shared application state handed to every handler.
///
/// Immutable after startup. `summarizer` is `None` when no usable API
/// credential was found.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub summarizer: Option<Summarizer>,
}

impl AppState {
    /// Builds the state, constructing the Gemini client from `config`.
    ///
    /// A client that cannot be built is logged and left unset rather than
    /// failing startup.
    pub fn from_config(config: AppConfig) -> Self {
        let summarizer = match config.gemini_api_key.as_deref() {
            None => {
                warn!("No GOOGLE_API_KEY or GEMINI_API_KEY set; AI service disabled");
                None
            }
            Some(key) => match GeminiClient::new(
                key,
                &config.gemini_model,
                &config.gemini_api_base,
                config.gemini_timeout,
            ) {
                Ok(client) => {
                    info!(model = %config.gemini_model, "Gemini client initialized successfully");
                    Some(Summarizer::new(Arc::new(client)))
                }
                Err(e) => {
                    warn!("Failed to initialize Gemini client. Check API Key. Error: {}", e);
                    None
                }
            },
        };

        Self { config, summarizer }
    }
}
