//! Generator error types

/// Failures at the generator boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The backend could not be reached or refused the request
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// The backend's specific key-denial signal (video path)
    #[error("api key missing or rejected by the generator")]
    ApiKeyMissing,

    /// The response body was not the JSON shape the contract promises
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),

    /// Fetching a finished video artifact failed
    #[error("download failed: {0}")]
    Download(String),
}
