//! The edit orchestrator
//!
//! Turns one natural-language instruction plus the current scene into a
//! next scene. The generator does the editing; the orchestrator does the
//! distrust: classification, busy gating, schema validation of the
//! response, and lock enforcement all happen here, on this side of the
//! network.

use crate::error::OrchestratorError;
use crate::lock::{enforce_lock, LockDecision};
use siteplan_generator::{SceneEditRequest, SceneGenerator};
use siteplan_scene::parse_scene;
use siteplan_store::{OperationClass, SceneStore, SelectionRef};
use std::sync::Arc;
use std::time::Duration;
use ulid::Ulid;

/// Correlates one orchestrated request across log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Ulid);

impl RequestId {
    /// Generate a new request id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Fixed interval between video-job polls
    pub poll_interval: Duration,
}

impl OrchestratorConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom poll interval
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
        }
    }
}

/// What became of one submitted prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The instruction ended with `?`: no generator call, no mutation.
    /// The caller routes it to its question-answering surface.
    Question,
    /// An edit was applied; the scene in the store is the new value
    Edited(EditReport),
}

/// Caller-facing notes about one applied edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    /// Log-correlation id for this request
    pub request_id: RequestId,
    /// The structure lock was released by the edit in place of a blocked
    /// movement; the caller should tell the user
    pub lock_auto_disabled: bool,
    /// Positional drift from the generator was discarded
    pub positions_restored: bool,
}

/// Central orchestrator: owns the store handle and the generator seam
pub struct EditOrchestrator {
    pub(crate) store: Arc<SceneStore>,
    pub(crate) generator: Arc<dyn SceneGenerator>,
    pub(crate) config: OrchestratorConfig,
}

impl EditOrchestrator {
    /// Create an orchestrator with default configuration
    #[must_use]
    pub fn new(store: Arc<SceneStore>, generator: Arc<dyn SceneGenerator>) -> Self {
        Self::with_config(store, generator, OrchestratorConfig::default())
    }

    /// Create an orchestrator with explicit configuration
    #[must_use]
    pub fn with_config(
        store: Arc<SceneStore>,
        generator: Arc<dyn SceneGenerator>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    /// The store this orchestrator mutates
    #[inline]
    #[must_use]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// Process one natural-language instruction.
    ///
    /// Trailing-`?` instructions are classified as questions and produce
    /// no scene mutation; everything else goes to the generator and comes
    /// back through schema validation and lock enforcement before the
    /// store is touched. On any failure the current scene is left exactly
    /// as it was.
    ///
    /// # Errors
    /// See [`OrchestratorError`]; no variant leaves a partially-applied
    /// scene behind.
    pub async fn submit_prompt(
        &self,
        instruction: &str,
    ) -> Result<PromptOutcome, OrchestratorError> {
        let trimmed = instruction.trim();
        if trimmed.is_empty() {
            return Err(OrchestratorError::EmptyInstruction);
        }
        // Syntactic heuristic, knowingly imprecise: a trailing question
        // mark means "answer, don't edit".
        if trimmed.ends_with('?') {
            tracing::debug!("instruction classified as question");
            return Ok(PromptOutcome::Question);
        }

        let _busy = self.store.begin(OperationClass::PromptEdit)?;
        let request_id = RequestId::new();
        tracing::info!(%request_id, instruction = trimmed, "prompt edit started");

        let prev = self.store.scene();
        let request = SceneEditRequest::new(&prev, trimmed);
        let raw = self.generator.edit_scene(request).await?;
        let candidate = parse_scene(raw)?;

        let (accepted, decision) = enforce_lock(&prev, candidate);
        match decision {
            LockDecision::AutoUnlocked => {
                tracing::info!(%request_id, "structure lock auto-disabled to apply a movement");
            }
            LockDecision::DriftSuppressed => {
                tracing::warn!(%request_id, "lock violation suppressed: positional drift discarded");
            }
            LockDecision::Unlocked | LockDecision::PositionsPreserved => {}
        }

        self.store.replace_scene(accepted);
        tracing::info!(%request_id, "prompt edit applied");

        Ok(PromptOutcome::Edited(EditReport {
            request_id,
            lock_auto_disabled: decision == LockDecision::AutoUnlocked,
            positions_restored: decision == LockDecision::DriftSuppressed,
        }))
    }

    /// Commit a direct-manipulation position change.
    ///
    /// Drag edits bypass the generator, so the lock check the generator
    /// would have been instructed with is performed locally instead.
    ///
    /// # Errors
    /// [`OrchestratorError::PositionLocked`] while the lock is engaged and
    /// the position actually changes;
    /// [`OrchestratorError::UnknownEntity`] for a stale target.
    #[allow(clippy::float_cmp)]
    pub fn commit_position(
        &self,
        target: &SelectionRef,
        x: f64,
        y: f64,
    ) -> Result<(), OrchestratorError> {
        let mut scene = self.store.scene();
        let current = match target {
            SelectionRef::Office { id } => scene
                .office(id)
                .map(|o| (o.x, o.y))
                .ok_or_else(|| OrchestratorError::UnknownEntity { id: id.clone() })?,
            SelectionRef::Warehouse { id } => {
                if scene.warehouse.id == *id {
                    (scene.warehouse.x, scene.warehouse.y)
                } else {
                    return Err(OrchestratorError::UnknownEntity { id: id.clone() });
                }
            }
        };

        if current == (x, y) {
            return Ok(());
        }
        if scene.structure_lock {
            return Err(OrchestratorError::PositionLocked);
        }

        match target {
            SelectionRef::Office { id } => {
                if let Some(office) = scene.office_mut(id) {
                    office.x = x;
                    office.y = y;
                }
            }
            SelectionRef::Warehouse { .. } => {
                scene.warehouse.x = x;
                scene.warehouse.y = y;
            }
        }
        self.store.replace_scene(scene);
        Ok(())
    }

    /// Commit a direct-manipulation resize.
    ///
    /// Dimensions are non-positional, so this is allowed regardless of the
    /// lock state.
    ///
    /// # Errors
    /// [`OrchestratorError::UnknownEntity`] for a stale target.
    pub fn commit_size(
        &self,
        target: &SelectionRef,
        w: f64,
        h: f64,
    ) -> Result<(), OrchestratorError> {
        let mut scene = self.store.scene();
        match target {
            SelectionRef::Office { id } => {
                let office = scene
                    .office_mut(id)
                    .ok_or_else(|| OrchestratorError::UnknownEntity { id: id.clone() })?;
                office.w = w;
                office.h = h;
            }
            SelectionRef::Warehouse { id } => {
                if scene.warehouse.id != *id {
                    return Err(OrchestratorError::UnknownEntity { id: id.clone() });
                }
                scene.warehouse.w = w;
                scene.warehouse.h = h;
            }
        }
        self.store.replace_scene(scene);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteplan_generator::MockSceneGenerator;
    use siteplan_test_utils::unlocked_scene;

    fn orchestrator_with(scene: siteplan_scene::Scene) -> EditOrchestrator {
        EditOrchestrator::new(
            Arc::new(SceneStore::with_scene(scene)),
            Arc::new(MockSceneGenerator::new()),
        )
    }

    #[test]
    fn locked_drag_is_rejected() {
        let orchestrator = orchestrator_with(siteplan_scene::initial_scene());
        let result =
            orchestrator.commit_position(&SelectionRef::office("officeA"), 10.0, 10.0);
        assert_eq!(result, Err(OrchestratorError::PositionLocked));
        assert_eq!(orchestrator.store().scene().office("officeA").unwrap().x, 42.5);
    }

    #[test]
    fn locked_drag_to_same_spot_is_a_noop() {
        let orchestrator = orchestrator_with(siteplan_scene::initial_scene());
        let result =
            orchestrator.commit_position(&SelectionRef::office("officeA"), 42.5, 25.0);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn unlocked_drag_commits() {
        let orchestrator = orchestrator_with(unlocked_scene());
        orchestrator
            .commit_position(&SelectionRef::warehouse("wh1"), 50.0, 80.0)
            .unwrap();

        let scene = orchestrator.store().scene();
        assert_eq!((scene.warehouse.x, scene.warehouse.y), (50.0, 80.0));
    }

    #[test]
    fn resize_is_allowed_under_lock() {
        let orchestrator = orchestrator_with(siteplan_scene::initial_scene());
        orchestrator
            .commit_size(&SelectionRef::office("officeB"), 35.0, 28.0)
            .unwrap();

        let office = orchestrator.store().scene().office("officeB").cloned().unwrap();
        assert_eq!((office.w, office.h), (35.0, 28.0));
    }

    #[test]
    fn stale_target_is_reported() {
        let orchestrator = orchestrator_with(siteplan_scene::initial_scene());
        let result = orchestrator.commit_size(&SelectionRef::office("ghost"), 1.0, 1.0);
        assert_eq!(
            result,
            Err(OrchestratorError::UnknownEntity {
                id: "ghost".to_string()
            })
        );
    }
}
