//! Error types for the Scrollfolio domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all Scrollfolio operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Mail relay errors ---
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    // --- Frame sequence errors ---
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum MailError {
    #[error("Mail relay not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail relay rejected credentials: {0}")]
    AuthenticationFailed(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Failed to read sequence directory {path}: {reason}")]
    ReadDir { path: PathBuf, reason: String },

    #[error("Failed to decode frame {index}: {reason}")]
    Decode { index: usize, reason: String },

    #[error("Frame index {index} out of range (frame count {frame_count})")]
    OutOfRange { index: usize, frame_count: usize },

    #[error("Failed to write image to {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}
