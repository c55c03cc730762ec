//! Settings Application
//!
//! Writes resolved settings onto live targets (editor buffers) once per target
//! lifetime, and forgets a target again when it is closed.

pub mod applicator;
pub mod events;
pub mod state;
pub mod target;

pub use applicator::{ApplyOutcome, SettingsApplicator};
pub use events::{EventOutcome, LifecycleEvent};
pub use state::ApplicatorState;
pub use target::{Buffer, Target, TargetId};
