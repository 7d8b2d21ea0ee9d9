//! Single mutually-exclusive busy gate
//!
//! Generator-backed operations are long-running; the system supports at
//! most one in flight across all classes. The gate records which class
//! holds it so a rejection can say what is still running. Release is tied
//! to guard drop, so failure paths cannot leak a held gate.

use crate::error::StoreError;
use parking_lot::Mutex;
use std::sync::Arc;

/// The request classes that contend for the busy gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationClass {
    /// Natural-language scene edit
    PromptEdit,
    /// Photorealistic image rendering
    ImageRender,
    /// Image-to-image edit
    ImageEdit,
    /// Video fly-through synthesis
    VideoGenerate,
}

impl std::fmt::Display for OperationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationClass::PromptEdit => "prompt-edit",
            OperationClass::ImageRender => "image-render",
            OperationClass::ImageEdit => "image-edit",
            OperationClass::VideoGenerate => "video-generate",
        };
        f.write_str(name)
    }
}

/// The gate itself; owned by the store
#[derive(Debug, Default)]
pub(crate) struct BusyGate {
    current: Arc<Mutex<Option<OperationClass>>>,
}

impl BusyGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim the gate for one operation.
    ///
    /// # Errors
    /// [`StoreError::Busy`] if any class already holds it.
    pub(crate) fn begin(&self, class: OperationClass) -> Result<BusyGuard, StoreError> {
        let mut current = self.current.lock();
        if let Some(in_flight) = *current {
            return Err(StoreError::Busy { in_flight });
        }
        *current = Some(class);
        tracing::debug!(%class, "busy gate claimed");
        Ok(BusyGuard {
            gate: Arc::clone(&self.current),
            class,
        })
    }

    pub(crate) fn in_flight(&self) -> Option<OperationClass> {
        *self.current.lock()
    }
}

/// Releases the busy gate when dropped
#[derive(Debug)]
pub struct BusyGuard {
    gate: Arc<Mutex<Option<OperationClass>>>,
    class: OperationClass,
}

impl BusyGuard {
    /// The operation class this guard was claimed for
    #[inline]
    #[must_use]
    pub fn class(&self) -> OperationClass {
        self.class
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        *self.gate.lock() = None;
        tracing::debug!(class = %self.class, "busy gate released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_idle() {
        let gate = BusyGate::new();
        assert_eq!(gate.in_flight(), None);
    }

    #[test]
    fn second_claim_is_rejected() {
        let gate = BusyGate::new();
        let _guard = gate.begin(OperationClass::PromptEdit).unwrap();

        let rejected = gate.begin(OperationClass::ImageRender);
        assert_eq!(
            rejected.map(|g| g.class()),
            Err(StoreError::Busy {
                in_flight: OperationClass::PromptEdit
            })
        );
    }

    #[test]
    fn drop_releases_the_gate() {
        let gate = BusyGate::new();
        {
            let _guard = gate.begin(OperationClass::VideoGenerate).unwrap();
            assert_eq!(gate.in_flight(), Some(OperationClass::VideoGenerate));
        }
        assert_eq!(gate.in_flight(), None);
        assert!(gate.begin(OperationClass::ImageEdit).is_ok());
    }

    #[test]
    fn class_display_names() {
        assert_eq!(OperationClass::PromptEdit.to_string(), "prompt-edit");
        assert_eq!(OperationClass::VideoGenerate.to_string(), "video-generate");
    }
}
