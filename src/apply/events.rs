//! Host lifecycle events and how they map onto the applicator.

use crate::apply::applicator::{ApplyOutcome, SettingsApplicator};
use crate::apply::target::Target;

/// Lifecycle notifications delivered by the host for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Loaded,
    Saved,
    Closed,
}

/// What handling a lifecycle event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Apply(ApplyOutcome),
    Released,
}

impl SettingsApplicator {
    /// Loaded and saved targets get settings applied (once); closed ones are released.
    pub fn handle<T: Target + ?Sized>(
        &self,
        event: LifecycleEvent,
        target: &mut T,
    ) -> EventOutcome {
        match event {
            LifecycleEvent::Loaded | LifecycleEvent::Saved => {
                EventOutcome::Apply(self.apply_once(target))
            }
            LifecycleEvent::Closed => {
                self.release(target.id());
                EventOutcome::Released
            }
        }
    }
}
