//! Academy API Library
//!
//! This crate provides the playlist request handler, its HTTP transport, and
//! application setup.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use handlers::playlist::{handle_request, ApiRequest, ApiResponse};
pub use state::AppState;
