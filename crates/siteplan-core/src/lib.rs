//! Siteplan core — the edit orchestrator
//!
//! The scene-consistency contract lives here: one natural-language
//! instruction plus the current scene becomes a next scene, with the
//! structure-lock protocol enforced defensively on whatever the external
//! generator returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use siteplan_core::prelude::*;
//! use siteplan_generator::{GeneratorConfig, HttpGenerator};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(SceneStore::new());
//! let generator = Arc::new(HttpGenerator::new(GeneratorConfig::from_env()));
//! let orchestrator = EditOrchestrator::new(store, generator);
//!
//! match orchestrator.submit_prompt("Make the warehouse roof blue").await? {
//!     PromptOutcome::Edited(report) if report.lock_auto_disabled => {
//!         println!("Structure lock was automatically disabled.");
//!     }
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod cancel;
pub mod error;
pub mod lock;
pub mod orchestrator;
pub mod transfer;

mod media;

// Re-exports for convenience
pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use error::OrchestratorError;
pub use lock::{enforce_lock, positions_preserved, restore_positions, LockDecision};
pub use orchestrator::{
    EditOrchestrator, EditReport, OrchestratorConfig, PromptOutcome, RequestId,
};
pub use transfer::{export_scene, import_scene, write_export, EXPORT_FILE_NAME};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the editing core
    pub use crate::{
        cancel_pair, EditOrchestrator, EditReport, OrchestratorConfig, OrchestratorError,
        PromptOutcome,
    };
    pub use siteplan_generator::AspectRatio;
    pub use siteplan_scene::{initial_scene, Scene};
    pub use siteplan_store::{SceneStore, SelectionRef};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
