//! Scene data model for the Siteplan workspace
//!
//! Defines the single root `Scene` value every other crate operates on:
//! - Typed entities (plot, offices, courtyard, warehouse, roads, landscape)
//! - The structure-lock flag and free-text mesh overrides
//! - Shallow schema validation for candidate scenes produced externally
//! - JSON Schema emission for generator requests
//!
//! The wire format (JSON field names, enum spellings) is fixed; all
//! coordinates are meters from the plot's top-left origin.

#![warn(unreachable_pub)]

pub mod initial;
pub mod model;
pub mod validate;

pub use initial::initial_scene;
pub use model::{
    Courtyard, Entrance, Landscape, Office, OfficeMaterial, Overrides, Parking, PerimeterSide,
    Plot, PlotBounds, PlotMask, PlotShape, RoadPoint, Roads, Roof, RoofType, Scene, UnitTag,
    Warehouse, WarehouseMaterial,
};
pub use validate::{parse_scene, scene_json_schema, validate, SchemaViolation};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
