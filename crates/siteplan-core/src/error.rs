//! Error taxonomy for the edit orchestrator
//!
//! Every failure is recovered at the orchestrator boundary: the prior
//! scene, image, and video state stay unchanged, and nothing retries
//! automatically — the user re-submits. The one auto-corrected case,
//! positional drift under an engaged lock, is not an error at all; it is
//! logged and reported through the edit report instead.

use siteplan_generator::GeneratorError;
use siteplan_scene::SchemaViolation;
use siteplan_store::{OperationClass, StoreError};

/// Failures surfaced by orchestrator operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrchestratorError {
    /// The instruction was empty or whitespace-only; rejected before any
    /// generator call
    #[error("instruction is empty")]
    EmptyInstruction,

    /// A prior request is still unresolved
    #[error("a {in_flight} request is already in flight")]
    Busy {
        /// The operation class holding the busy gate
        in_flight: OperationClass,
    },

    /// The generator could not be reached or refused the request
    #[error("generator unavailable: {0}")]
    GeneratorUnavailable(String),

    /// The generator's response was not a schema-conforming scene
    #[error("invalid model output: {0}")]
    InvalidModelOutput(String),

    /// The generator denied the request for lack of an API key (video path)
    #[error("api key missing or rejected by the generator")]
    ApiKeyMissing,

    /// The finished video could not be fetched
    #[error("failed to download the generated video: {0}")]
    DownloadFailed(String),

    /// The remote video job reported failure
    #[error("video generation failed: {0}")]
    VideoFailed(String),

    /// The caller cancelled a polling operation
    #[error("operation cancelled")]
    Cancelled,

    /// A direct-manipulation position change was attempted while the
    /// structure lock is engaged
    #[error("position change rejected: structure lock is engaged")]
    PositionLocked,

    /// A direct-manipulation target id does not exist in the scene
    #[error("no such entity: {id}")]
    UnknownEntity {
        /// The unresolved entity id
        id: String,
    },

    /// Scene import is a declared stub
    #[error("scene import is not implemented")]
    ImportUnsupported,
}

impl OrchestratorError {
    /// Whether this failure is the busy-gate rejection
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }
}

impl From<StoreError> for OrchestratorError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Busy { in_flight } => Self::Busy { in_flight },
        }
    }
}

impl From<GeneratorError> for OrchestratorError {
    fn from(error: GeneratorError) -> Self {
        match error {
            GeneratorError::Unavailable(detail) => Self::GeneratorUnavailable(detail),
            GeneratorError::ApiKeyMissing => Self::ApiKeyMissing,
            GeneratorError::MalformedResponse(detail) => Self::InvalidModelOutput(detail),
            GeneratorError::Download(detail) => Self::DownloadFailed(detail),
        }
    }
}

impl From<SchemaViolation> for OrchestratorError {
    fn from(violation: SchemaViolation) -> Self {
        Self::InvalidModelOutput(violation.to_string())
    }
}
