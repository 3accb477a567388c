//! Error types module
//!
//! `AppError` unifies the faults the playlist handler can hit. Input validation
//! is answered in-band by the handler, so every variant here is surfaced by the
//! transport as an opaque server error.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
