//! Applied-target registry

use crate::apply::target::TargetId;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Identities of targets that already had settings applied in their current lifetime.
///
/// Create one per process and share it (usually behind an `Arc`) with every
/// lifecycle handler. Membership changes are atomic, so concurrent handlers
/// cannot apply the same target twice.
#[derive(Debug, Default)]
pub struct ApplicatorState {
    applied: Mutex<HashSet<TargetId>>,
}

impl ApplicatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test-and-set: returns `true` only for the call that registered `id`.
    pub fn mark_applied(&self, id: TargetId) -> bool {
        self.applied.lock().insert(id)
    }

    /// Forget `id`. Returns whether it was registered.
    pub fn release(&self, id: TargetId) -> bool {
        self.applied.lock().remove(&id)
    }

    pub fn is_applied(&self, id: TargetId) -> bool {
        self.applied.lock().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.applied.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.lock().is_empty()
    }
}
