//! Error types for viewer and page configuration

use thiserror::Error;

/// Errors that can occur in viewer operations
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Cannot replace items while a transition is in flight")]
    TransitionInFlight,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a contact submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
