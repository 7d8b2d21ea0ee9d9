//! Selection references
//!
//! A selection is tracked by reference (entity kind + id), never as a live
//! pointer into the scene. The snapshot a view actually displays is
//! re-derived from the current scene by the projection crate.

use serde::{Deserialize, Serialize};
use siteplan_scene::Scene;

/// Reference to the currently highlighted entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionRef {
    /// An office, by id
    Office {
        /// Entity id
        id: String,
    },
    /// The warehouse, by id
    Warehouse {
        /// Entity id
        id: String,
    },
}

impl SelectionRef {
    /// Reference an office by id
    #[must_use]
    pub fn office(id: impl Into<String>) -> Self {
        Self::Office { id: id.into() }
    }

    /// Reference the warehouse by id
    #[must_use]
    pub fn warehouse(id: impl Into<String>) -> Self {
        Self::Warehouse { id: id.into() }
    }

    /// The referenced entity id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Office { id } | Self::Warehouse { id } => id,
        }
    }

    /// Whether the referenced entity still exists in `scene`
    #[must_use]
    pub fn resolves(&self, scene: &Scene) -> bool {
        match self {
            Self::Office { id } => scene.office(id).is_some(),
            Self::Warehouse { id } => scene.warehouse.id == *id,
        }
    }
}
