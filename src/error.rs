//! Typed error values shared by all pipeline stages.
//!
//! Every stage of the pipeline fails fast and surfaces one of these variants
//! to its caller. No stage swallows a failure and substitutes a default or
//! partial result; the run stops at the first error and reports it.

use thiserror::Error;

/// Main error type for all playlist analysis operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied playlist URL does not have the expected shape.
    #[error("Invalid playlist reference: {0}")]
    InvalidReferenceFormat(String),

    /// The client-credentials token exchange failed or returned no token.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// HTTP request failed (network error, timeout, non-success status).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was missing an expected JSON field or had the wrong type.
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    /// An audio-feature key code outside the pitch-class range 0-11.
    #[error("Unknown key code: {0}")]
    UnknownKeyCode(i64),

    /// The track table handed to the statistics stage is unusable.
    #[error("Malformed input table: {0}")]
    MalformedInputTable(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for playlist analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
