//! Selection/properties projection
//!
//! Resolves a selection reference against the current scene and returns a
//! read-only snapshot of the entity — never a live reference. The snapshot
//! is what a properties panel displays: id, kind, position, size.

use serde::Serialize;
use siteplan_scene::{Office, Scene, Warehouse};
use siteplan_store::SelectionRef;

/// Kind of a selectable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Office,
    Warehouse,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Office => f.write_str("office"),
            EntityKind::Warehouse => f.write_str("warehouse"),
        }
    }
}

/// Read-only snapshot of the selected entity.
///
/// Owned data cloned out of the scene at projection time; it does not
/// track later scene changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectedObject {
    /// A selected office
    Office(Office),
    /// The selected warehouse
    Warehouse(Warehouse),
}

impl SelectedObject {
    /// Entity kind tag
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Office(_) => EntityKind::Office,
            Self::Warehouse(_) => EntityKind::Warehouse,
        }
    }

    /// Entity id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Office(o) => &o.id,
            Self::Warehouse(w) => &w.id,
        }
    }

    /// Entity position `(x, y)` in meters
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Office(o) => (o.x, o.y),
            Self::Warehouse(w) => (w.x, w.y),
        }
    }

    /// Entity size `(w, h)` in meters
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Office(o) => (o.w, o.h),
            Self::Warehouse(w) => (w.w, w.h),
        }
    }
}

/// Resolve a selection reference against the current scene.
///
/// Returns `None` when nothing is selected or the referenced id no longer
/// exists in the scene.
#[must_use]
pub fn project(scene: &Scene, selection: Option<&SelectionRef>) -> Option<SelectedObject> {
    match selection? {
        SelectionRef::Office { id } => scene.office(id).cloned().map(SelectedObject::Office),
        SelectionRef::Warehouse { id } => (scene.warehouse.id == *id)
            .then(|| SelectedObject::Warehouse(scene.warehouse.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteplan_scene::initial_scene;

    #[test]
    fn no_selection_projects_to_none() {
        assert_eq!(project(&initial_scene(), None), None);
    }

    #[test]
    fn office_selection_snapshots_current_fields() {
        let scene = initial_scene();
        let selection = SelectionRef::office("officeA");

        let selected = project(&scene, Some(&selection)).unwrap();
        assert_eq!(selected.kind(), EntityKind::Office);
        assert_eq!(selected.id(), "officeA");
        assert_eq!(selected.position(), (42.5, 25.0));
        assert_eq!(selected.size(), (30.0, 32.0));
    }

    #[test]
    fn warehouse_selection_projects() {
        let scene = initial_scene();
        let selected = project(&scene, Some(&SelectionRef::warehouse("wh1"))).unwrap();
        assert_eq!(selected.kind(), EntityKind::Warehouse);
        assert_eq!(selected.position(), (45.0, 75.0));
    }

    #[test]
    fn stale_reference_projects_to_none() {
        let mut scene = initial_scene();
        scene.offices.retain(|o| o.id != "officeB");
        assert_eq!(project(&scene, Some(&SelectionRef::office("officeB"))), None);
    }

    #[test]
    fn snapshot_does_not_track_later_changes() {
        let mut scene = initial_scene();
        let selected = project(&scene, Some(&SelectionRef::office("officeA"))).unwrap();

        scene.office_mut("officeA").unwrap().w = 99.0;
        assert_eq!(selected.size(), (30.0, 32.0));
    }
}
