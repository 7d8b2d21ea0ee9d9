//! External generator client for the Siteplan workspace
//!
//! The generative backend produces edited scenes, photorealistic images,
//! image edits, and video fly-throughs. This crate defines the seam to
//! that service:
//! - [`SceneGenerator`] — the async trait every backend implements
//! - [`HttpGenerator`] — the JSON-over-HTTP implementation
//! - deterministic prompt assembly from scene fields
//!
//! Everything the backend returns is untrusted; scene candidates are
//! validated by `siteplan-scene` before they are allowed near the store.

#![warn(unreachable_pub)]

pub mod client;
pub mod config;
pub mod error;
pub mod prompts;
pub mod types;

pub use client::{HttpGenerator, SceneGenerator};
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use types::{
    AspectRatio, ImageArtifact, SceneEditRequest, VideoArtifact, VideoJobHandle, VideoJobStatus,
};

#[cfg(any(test, feature = "mock"))]
pub use client::MockSceneGenerator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
