//! Error types for TripTactix.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Advisory error: {0}")]
    Advisory(#[from] AdvisoryError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Travel store (persistence collaborator) errors.
///
/// The `Display` text of these variants is what the dialogue engine sniffs
/// when phrasing a completion failure for the user, so transport failures
/// deliberately mention "network" and service envelopes carry the upstream
/// message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("network request failed: {0}")]
    Http(String),

    #[error("store API rejected the request: {message}")]
    Service { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),
}

/// LLM transport errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM API key not configured")]
    MissingApiKey,

    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("invalid LLM response: {0}")]
    InvalidResponse(String),
}

/// Advisory generation errors.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("advisory service unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
