//! The scene store
//!
//! Exactly one live scene value, replaced wholesale and never patched in
//! place. Observers (the render projections) are notified synchronously
//! after each replacement and always see a fully-formed value.

use crate::busy::{BusyGate, BusyGuard, OperationClass};
use crate::error::StoreError;
use crate::selection::SelectionRef;
use parking_lot::{Mutex, RwLock};
use siteplan_scene::{initial_scene, Scene};
use std::sync::Arc;

/// Observer of scene replacements.
///
/// Implementations re-derive their drawable primitives from the full scene
/// value on every call; no incremental diff is provided or assumed.
pub trait SceneObserver: Send + Sync {
    /// Called synchronously after the live scene has been replaced
    fn scene_replaced(&self, scene: &Scene);
}

/// Holds the single live scene, the selection slot, and the busy gate
pub struct SceneStore {
    scene: RwLock<Scene>,
    selection: Mutex<Option<SelectionRef>>,
    observers: RwLock<Vec<Arc<dyn SceneObserver>>>,
    busy: BusyGate,
}

impl SceneStore {
    /// Create a store holding the fixed startup scene
    #[must_use]
    pub fn new() -> Self {
        Self::with_scene(initial_scene())
    }

    /// Create a store holding an explicit scene
    #[must_use]
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene: RwLock::new(scene),
            selection: Mutex::new(None),
            observers: RwLock::new(Vec::new()),
            busy: BusyGate::new(),
        }
    }

    /// Snapshot of the current scene
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene.read().clone()
    }

    /// Replace the live scene in whole.
    ///
    /// Invalidates the selection if its id no longer resolves, then
    /// notifies observers with the new value.
    pub fn replace_scene(&self, next: Scene) {
        {
            let mut scene = self.scene.write();
            *scene = next;
        }
        self.revalidate_selection();
        self.notify();
    }

    /// Flip the structure lock; every other field is left untouched.
    ///
    /// Returns the new lock value.
    pub fn toggle_lock(&self) -> bool {
        let engaged = {
            let mut scene = self.scene.write();
            scene.structure_lock = !scene.structure_lock;
            scene.structure_lock
        };
        tracing::debug!(engaged, "structure lock toggled");
        self.notify();
        engaged
    }

    /// Current selection reference, if any
    #[must_use]
    pub fn selection(&self) -> Option<SelectionRef> {
        self.selection.lock().clone()
    }

    /// Select an entity, or clear the selection with `None`
    pub fn set_selection(&self, selection: Option<SelectionRef>) {
        *self.selection.lock() = selection;
    }

    /// Register an observer for scene replacements
    pub fn subscribe(&self, observer: Arc<dyn SceneObserver>) {
        self.observers.write().push(observer);
    }

    /// Claim the busy gate for a long-running operation
    ///
    /// # Errors
    /// [`StoreError::Busy`] while a prior request is unresolved.
    pub fn begin(&self, class: OperationClass) -> Result<BusyGuard, StoreError> {
        self.busy.begin(class)
    }

    /// The operation class currently in flight, if any
    #[must_use]
    pub fn in_flight(&self) -> Option<OperationClass> {
        self.busy.in_flight()
    }

    fn revalidate_selection(&self) {
        let scene = self.scene.read();
        let mut selection = self.selection.lock();
        if let Some(current) = selection.as_ref() {
            if !current.resolves(&scene) {
                tracing::debug!(id = current.id(), "selection invalidated");
                *selection = None;
            }
        }
    }

    fn notify(&self) {
        let scene = self.scene.read().clone();
        let observers = self.observers.read().clone();
        for observer in observers {
            observer.scene_replaced(&scene);
        }
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use siteplan_test_utils::{recolored_roof, unlocked_scene};

    #[derive(Default)]
    struct Recorder {
        lock_values: Mutex<Vec<bool>>,
    }

    impl SceneObserver for Recorder {
        fn scene_replaced(&self, scene: &Scene) {
            self.lock_values.lock().push(scene.structure_lock);
        }
    }

    #[test]
    fn replace_swaps_the_whole_value() {
        let store = SceneStore::new();
        let next = recolored_roof(&store.scene(), "#0000FF");

        store.replace_scene(next.clone());
        assert_eq!(store.scene(), next);
    }

    #[test]
    fn replace_notifies_observers_synchronously() {
        let store = SceneStore::new();
        let recorder = Arc::new(Recorder::default());
        store.subscribe(recorder.clone());

        store.replace_scene(unlocked_scene());
        assert_eq!(*recorder.lock_values.lock(), vec![false]);
    }

    #[test]
    fn toggle_lock_changes_nothing_else() {
        let store = SceneStore::new();
        let before = store.scene();

        assert!(!store.toggle_lock());
        let mut after = store.scene();
        assert!(!after.structure_lock);

        after.structure_lock = before.structure_lock;
        assert_eq!(after, before);
    }

    #[test]
    fn double_toggle_is_identity() {
        let store = SceneStore::new();
        let before = store.scene();

        store.toggle_lock();
        store.toggle_lock();
        assert_eq!(store.scene(), before);
    }

    #[test]
    fn selection_survives_replace_when_entity_remains() {
        let store = SceneStore::new();
        store.set_selection(Some(SelectionRef::office("officeA")));

        store.replace_scene(unlocked_scene());
        assert_eq!(store.selection(), Some(SelectionRef::office("officeA")));
    }

    #[test]
    fn selection_cleared_when_entity_disappears() {
        let store = SceneStore::new();
        store.set_selection(Some(SelectionRef::office("officeB")));

        let mut next = store.scene();
        next.offices.retain(|o| o.id != "officeB");
        store.replace_scene(next);

        assert_eq!(store.selection(), None);
    }

    #[test]
    fn deselect_clears_the_slot() {
        let store = SceneStore::new();
        store.set_selection(Some(SelectionRef::warehouse("wh1")));
        store.set_selection(None);
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn busy_gate_is_exposed_through_the_store() {
        let store = SceneStore::new();
        let guard = store.begin(OperationClass::PromptEdit).unwrap();

        assert_eq!(store.in_flight(), Some(OperationClass::PromptEdit));
        assert!(store.begin(OperationClass::ImageRender).is_err());

        drop(guard);
        assert_eq!(store.in_flight(), None);
    }
}
