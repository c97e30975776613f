//! Error types for eventfinder.

use thiserror::Error;

/// Errors that can occur in eventfinder operations.
#[derive(Error, Debug)]
pub enum EventfinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load event data: {0}")]
    DataLoad(String),

    #[error("Invalid event data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Invalid review: {0}")]
    InvalidReview(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(i64),
}

/// Result type alias for eventfinder operations.
pub type EventfinderResult<T> = Result<T, EventfinderError>;
