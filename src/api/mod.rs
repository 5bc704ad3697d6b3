//! HTTP handlers and request processing

pub mod handler;
pub mod helpers;
pub mod state;
pub mod upload;

// Re-export the router builder for convenience
pub use handler::{MAX_CONTENT_LENGTH, build_router};
pub use state::AppState;
