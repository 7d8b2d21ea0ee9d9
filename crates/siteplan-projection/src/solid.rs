//! 3D perspective projection
//!
//! Derives world-space primitives for the perspective view: a ground plane
//! from the plot bounds, one box per building, and a triangular roof prism
//! when the warehouse roof is pitched. Plot coordinates map to the XZ
//! plane; Y is up. The scene is recentered with fixed offsets so the site
//! sits around the world origin.

use serde::Serialize;
use siteplan_scene::{RoofType, Scene};

/// World-space X shift applied to every plot x coordinate
pub const X_OFFSET: f64 = -80.0;
/// World-space Z shift applied to every plot y coordinate
pub const Z_OFFSET: f64 = -50.0;
/// Vertical exaggeration applied to building heights
pub const HEIGHT_SCALE: f64 = 1.5;

/// Unscaled office height in meters
const OFFICE_HEIGHT: f64 = 5.0;
/// Unscaled warehouse wall height in meters
const WAREHOUSE_WALL_HEIGHT: f64 = 8.0;
/// Unscaled pitched-roof rise in meters
const ROOF_RISE: f64 = 4.0;

/// Ground plane sized to the plot bounds, lying on the XZ plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundPlane {
    pub w: f64,
    pub h: f64,
}

/// One axis-aligned building box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingBlock {
    /// Entity id
    pub id: String,
    /// Box center in world space `[x, y, z]`
    pub center: [f64; 3],
    /// Box dimensions `[w, height, depth]`
    pub dims: [f64; 3],
    /// Face color
    pub color: String,
}

/// Triangular prism capping the warehouse when the roof is pitched.
///
/// The ridge runs along the depth axis at half width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoofPrism {
    /// World-space position of the footprint's top-left corner at eaves
    /// height `[x, y, z]`
    pub origin: [f64; 3],
    /// Footprint width (ridge at `width / 2`)
    pub width: f64,
    /// Footprint depth along the ridge
    pub depth: f64,
    /// Ridge rise above the eaves
    pub rise: f64,
    /// Face color
    pub color: String,
}

/// Everything the 3D view draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidView {
    pub ground: GroundPlane,
    /// Office boxes followed by the warehouse box
    pub blocks: Vec<BuildingBlock>,
    /// Present only for a pitched warehouse roof
    pub roof: Option<RoofPrism>,
}

/// Derive the 3D primitives from a scene
#[must_use]
pub fn solid_view(scene: &Scene) -> SolidView {
    let ground = GroundPlane {
        w: scene.plot.bounds.w,
        h: scene.plot.bounds.h,
    };

    let office_height = OFFICE_HEIGHT * HEIGHT_SCALE;
    let mut blocks: Vec<BuildingBlock> = scene
        .offices
        .iter()
        .map(|o| BuildingBlock {
            id: o.id.clone(),
            center: [
                o.x + o.w / 2.0 + X_OFFSET,
                office_height / 2.0,
                o.y + o.h / 2.0 + Z_OFFSET,
            ],
            dims: [o.w, office_height, o.h],
            color: o.color.clone(),
        })
        .collect();

    let warehouse = &scene.warehouse;
    let wall_height = WAREHOUSE_WALL_HEIGHT * HEIGHT_SCALE;
    blocks.push(BuildingBlock {
        id: warehouse.id.clone(),
        center: [
            warehouse.x + warehouse.w / 2.0 + X_OFFSET,
            wall_height / 2.0,
            warehouse.y + warehouse.h / 2.0 + Z_OFFSET,
        ],
        dims: [warehouse.w, wall_height, warehouse.h],
        color: warehouse.wall_color.clone(),
    });

    let roof = (warehouse.roof.kind == RoofType::Pitched).then(|| RoofPrism {
        origin: [warehouse.x + X_OFFSET, wall_height, warehouse.y + Z_OFFSET],
        width: warehouse.w,
        depth: warehouse.h,
        rise: ROOF_RISE * HEIGHT_SCALE,
        color: warehouse.roof_color.clone(),
    });

    SolidView {
        ground,
        blocks,
        roof,
    }
}
