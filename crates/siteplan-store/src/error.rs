//! Store error types

use crate::busy::OperationClass;

/// Errors surfaced by store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another request is still unresolved; new submissions are rejected,
    /// never queued
    #[error("a {in_flight} request is already in flight")]
    Busy {
        /// The operation class currently holding the gate
        in_flight: OperationClass,
    },
}
