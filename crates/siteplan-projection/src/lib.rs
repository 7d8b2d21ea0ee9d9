//! Pure projections from scene state to drawable primitives
//!
//! The 2D schematic and 3D perspective views consume the full scene value
//! and re-derive everything they draw on every replacement; nothing here
//! keeps state between calls. The functions in this crate compute those
//! drawable primitives, plus the read-only properties summary for the
//! currently selected entity. Rasterization, styling, and interaction
//! handling live with the consuming views.

#![warn(unreachable_pub)]

pub mod plan;
pub mod selection;
pub mod solid;

pub use plan::{plan_view, Disc, Footprint, FootprintKind, PlanView, PlotFootprint, Rect, RoadPath};
pub use selection::{project, EntityKind, SelectedObject};
pub use solid::{solid_view, BuildingBlock, GroundPlane, RoofPrism, SolidView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
