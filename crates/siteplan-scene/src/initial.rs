//! The fixed startup scene
//!
//! Reproduces the reference site layout: an L-shaped plot with two office
//! blocks flanking a fountain courtyard, a pitched-roof warehouse to the
//! south, a north entrance with parking, and perimeter planting.

use crate::model::{
    Courtyard, Entrance, Landscape, Office, OfficeMaterial, Overrides, Parking, PerimeterSide,
    Plot, PlotBounds, PlotMask, PlotShape, RoadPoint, Roads, Roof, RoofType, Scene, UnitTag,
    Warehouse, WarehouseMaterial,
};

/// Build the scene the system starts from.
///
/// Every editing session begins here; the value is only ever replaced in
/// whole afterwards.
#[must_use]
pub fn initial_scene() -> Scene {
    Scene {
        units: UnitTag::Meters,
        plot: Plot {
            shape: PlotShape::L,
            bounds: PlotBounds { w: 160.0, h: 120.0 },
            // North-east corner is masked out to form the L.
            mask: vec![PlotMask {
                x: 120.0,
                y: 0.0,
                w: 40.0,
                h: 40.0,
            }],
        },
        offices: vec![
            Office {
                id: "officeA".to_string(),
                x: 42.5,
                y: 25.0,
                w: 30.0,
                h: 32.0,
                material: OfficeMaterial::Concrete,
                color: "#E2E8F0".to_string(),
            },
            Office {
                id: "officeB".to_string(),
                x: 87.5,
                y: 25.0,
                w: 30.0,
                h: 32.0,
                material: OfficeMaterial::Concrete,
                color: "#E2E8F0".to_string(),
            },
        ],
        courtyard: Courtyard {
            x: 72.5,
            y: 25.0,
            w: 15.0,
            h: 32.0,
            fountain: true,
        },
        warehouse: Warehouse {
            id: "wh1".to_string(),
            x: 45.0,
            y: 75.0,
            w: 70.0,
            h: 35.0,
            material: WarehouseMaterial::Steel,
            wall_color: "#CBD5E0".to_string(),
            roof_color: "#A0AEC0".to_string(),
            roof: Roof {
                kind: RoofType::Pitched,
                skylights: 16,
            },
        },
        roads: Roads {
            north_entrance: Entrance {
                x: 80.0,
                y: 10.0,
                parking: Parking { slots: 4 },
            },
            // Main road along the east and south perimeter, starting below
            // the masked corner.
            east: vec![
                RoadPoint { x: 150.0, y: 45.0 },
                RoadPoint { x: 150.0, y: 110.0 },
                RoadPoint { x: 20.0, y: 110.0 },
            ],
            west_turnaround_path: vec![
                RoadPoint { x: 20.0, y: 90.0 },
                RoadPoint { x: 10.0, y: 90.0 },
                RoadPoint { x: 10.0, y: 70.0 },
                RoadPoint { x: 20.0, y: 70.0 },
            ],
            width: 6.0,
        },
        landscape: Landscape {
            perimeter: vec![PerimeterSide::N, PerimeterSide::W, PerimeterSide::S],
            tree_spacing: 7.0,
        },
        structure_lock: true,
        overrides: Overrides::default(),
    }
}
