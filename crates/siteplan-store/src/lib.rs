//! Scene store for the Siteplan workspace
//!
//! Holds the one live [`Scene`](siteplan_scene::Scene) value and the one
//! optional selection reference. Every observable state is a value produced
//! by exactly one store operation: `replace_scene`, `toggle_lock`, or
//! `set_selection` — there is no field-level mutation path. A single
//! mutually-exclusive busy gate serializes long-running generator requests.

#![warn(unreachable_pub)]

pub mod busy;
pub mod error;
pub mod selection;
pub mod store;

pub use busy::{BusyGuard, OperationClass};
pub use error::StoreError;
pub use selection::SelectionRef;
pub use store::{SceneObserver, SceneStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
