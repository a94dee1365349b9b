//! Failure taxonomy for provider calls.
//!
//! `ProviderError` captures the cause; `GenerationError` and
//! `AnalysisError` tag which operation it happened in, because the state
//! machine treats the two very differently (fatal vs. recovered).

use thiserror::Error;

/// What went wrong talking to the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request never completed (connect, transport).
    #[error("request failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// Request exceeded the configured deadline.
    #[error("request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Provider answered 200 but produced no content.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// Content was present but did not match the requested schema.
    #[error("failed to parse provider output: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Content parsed but is unusable (e.g. a question whose correct
    /// index points past its options).
    #[error("provider output failed validation: {0}")]
    Invalid(String),
}

/// Question generation failed. Fatal to the session.
#[derive(Debug, Error)]
#[error("question generation failed: {source}")]
pub struct GenerationError {
    #[from]
    pub source: ProviderError,
}

/// Performance analysis failed. Recovered with a fallback result.
#[derive(Debug, Error)]
#[error("performance analysis failed: {source}")]
pub struct AnalysisError {
    #[from]
    pub source: ProviderError,
}
