//! Typed scene entities
//!
//! One struct per scene entity, serde-faithful to the JSON wire format
//! consumed and produced by the external generator. Enumerated fields are
//! closed enums so an out-of-enum spelling can never enter the typed model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Measurement unit tag.
///
/// The scene is always expressed in meters; the tag exists so the wire
/// format states it explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum UnitTag {
    /// Meters, the only recognized unit
    #[default]
    #[serde(rename = "m")]
    Meters,
}

/// Overall plot silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PlotShape {
    /// L-shaped plot (rectangle with masked-out corner)
    L,
    /// Plain rectangle
    Rect,
}

/// Plot bounding rectangle, anchored at the top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlotBounds {
    /// Width in meters
    pub w: f64,
    /// Height in meters
    pub h: f64,
}

/// Subtractive rectangular hole within the plot bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlotMask {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The site plot: bounds plus cut-out masks.
///
/// The buildable area is the bounds rectangle minus the union of the masks.
/// Nothing in this crate enforces that buildings stay inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Plot {
    pub shape: PlotShape,
    pub bounds: PlotBounds,
    #[serde(default)]
    pub mask: Vec<PlotMask>,
}

/// Office wall construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OfficeMaterial {
    Concrete,
    Steel,
    Container,
}

impl OfficeMaterial {
    /// Wire spelling of the material
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Concrete => "concrete",
            Self::Steel => "steel",
            Self::Container => "container",
        }
    }
}

impl std::fmt::Display for OfficeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rectangular office building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Office {
    /// Unique entity id within the scene
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub material: OfficeMaterial,
    /// Hex color code, e.g. `#FF0000`
    pub color: String,
}

/// Rectangular courtyard area between the offices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Courtyard {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Whether a fountain sits at the courtyard center
    pub fountain: bool,
}

/// Warehouse wall construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseMaterial {
    Steel,
    Concrete,
}

impl WarehouseMaterial {
    /// Wire spelling of the material
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Concrete => "concrete",
        }
    }
}

impl std::fmt::Display for WarehouseMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warehouse roof profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    Pitched,
    Flat,
}

impl RoofType {
    /// Wire spelling of the roof profile
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pitched => "pitched",
            Self::Flat => "flat",
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warehouse roof descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Roof {
    #[serde(rename = "type")]
    pub kind: RoofType,
    /// Number of skylight panels
    pub skylights: u32,
}

/// The single warehouse building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    /// Unique entity id within the scene
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub material: WarehouseMaterial,
    pub wall_color: String,
    pub roof_color: String,
    pub roof: Roof,
}

/// A vertex of a road polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoadPoint {
    pub x: f64,
    pub y: f64,
}

/// Parking descriptor at the north entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parking {
    pub slots: u32,
}

/// North entrance point with its parking apron
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Entrance {
    pub x: f64,
    pub y: f64,
    pub parking: Parking,
}

/// Road network: entrance, two polylines, shared width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roads {
    pub north_entrance: Entrance,
    /// Main road along the east and south perimeter
    pub east: Vec<RoadPoint>,
    /// U-turn loop on the west side
    #[serde(rename = "west_turnaround_path")]
    pub west_turnaround_path: Vec<RoadPoint>,
    /// Road width in meters
    pub width: f64,
}

/// Compass side of the plot perimeter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PerimeterSide {
    N,
    W,
    S,
    E,
}

/// Perimeter planting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Landscape {
    /// Sides of the plot that carry a tree row
    pub perimeter: Vec<PerimeterSide>,
    /// Distance between trees in meters
    pub tree_spacing: f64,
}

/// Free-text mesh override hooks for the 3D view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    pub warehouse_mesh: String,
    pub office_mesh: String,
}

/// The complete structured description of the site being visualized.
///
/// This is the single root value of the system. It is created once at
/// startup and thereafter only ever replaced in whole; no field is ever
/// patched in place outside the store's operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub units: UnitTag,
    pub plot: Plot,
    pub offices: Vec<Office>,
    pub courtyard: Courtyard,
    pub warehouse: Warehouse,
    pub roads: Roads,
    pub landscape: Landscape,
    /// While true, no entity's x/y may change across an edit
    pub structure_lock: bool,
    pub overrides: Overrides,
}

impl Scene {
    /// Look up an office by id
    #[must_use]
    pub fn office(&self, id: &str) -> Option<&Office> {
        self.offices.iter().find(|o| o.id == id)
    }

    /// Mutable office lookup by id
    pub fn office_mut(&mut self, id: &str) -> Option<&mut Office> {
        self.offices.iter_mut().find(|o| o.id == id)
    }

    /// All identifiable entity ids in the scene (offices + warehouse)
    #[must_use]
    pub fn entity_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.offices.iter().map(|o| o.id.as_str()).collect();
        ids.push(self.warehouse.id.as_str());
        ids
    }

    /// Check the id-uniqueness invariant
    #[must_use]
    pub fn ids_unique(&self) -> bool {
        let mut ids = self.entity_ids();
        ids.sort_unstable();
        ids.windows(2).all(|pair| pair[0] != pair[1])
    }
}
