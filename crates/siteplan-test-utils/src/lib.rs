//! Testing utilities for the Siteplan workspace
//!
//! Shared scene fixtures and candidate-scene mutators.

#![allow(missing_docs)]

use serde_json::Value;
use siteplan_scene::{initial_scene, Scene};

/// The startup scene; structure lock engaged.
pub fn locked_scene() -> Scene {
    initial_scene()
}

/// The startup scene with the structure lock released.
pub fn unlocked_scene() -> Scene {
    let mut scene = initial_scene();
    scene.structure_lock = false;
    scene
}

/// A copy of `scene` with one office shifted by `(dx, dy)`.
pub fn moved_office(scene: &Scene, id: &str, dx: f64, dy: f64) -> Scene {
    let mut next = scene.clone();
    if let Some(office) = next.office_mut(id) {
        office.x += dx;
        office.y += dy;
    }
    next
}

/// A copy of `scene` with the warehouse roof recolored.
pub fn recolored_roof(scene: &Scene, color: &str) -> Scene {
    let mut next = scene.clone();
    next.warehouse.roof_color = color.to_string();
    next
}

/// A copy of `scene` with a different skylight count.
pub fn with_skylights(scene: &Scene, skylights: u32) -> Scene {
    let mut next = scene.clone();
    next.warehouse.roof.skylights = skylights;
    next
}

/// A copy of `scene` with the lock flag overwritten.
pub fn with_lock(scene: &Scene, engaged: bool) -> Scene {
    let mut next = scene.clone();
    next.structure_lock = engaged;
    next
}

/// Serialize a scene to the JSON value the generator would return.
pub fn as_value(scene: &Scene) -> Value {
    serde_json::to_value(scene).expect("scene serializes")
}
