//! Apply resolved settings to targets exactly once per target lifetime.

use crate::apply::state::ApplicatorState;
use crate::apply::target::{Target, TargetId};
use crate::layers::LayeredSettingsLoader;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a single `apply_once` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Settings were resolved and `keys` values were written.
    Applied { keys: usize },
    /// The target has no backing file; nothing was written.
    NoFilePath,
    /// The target's path could not be walked; nothing was written.
    Unresolvable(String),
    /// The target was already configured in its current lifetime.
    AlreadyApplied,
}

/// Writes resolved settings onto targets, gated by the applied-target registry
pub struct SettingsApplicator {
    loader: LayeredSettingsLoader,
    state: Arc<ApplicatorState>,
}

impl SettingsApplicator {
    pub fn new(loader: LayeredSettingsLoader, state: Arc<ApplicatorState>) -> Self {
        Self { loader, state }
    }

    pub fn state(&self) -> &ApplicatorState {
        &self.state
    }

    /// Resolve and write settings onto `target` unless it is already configured.
    ///
    /// The target is registered before resolution, so a target without a file path
    /// is not probed again on later loads or saves. Writes are an additive overlay:
    /// keys missing from the resolved settings are left untouched in the store.
    pub fn apply_once<T: Target + ?Sized>(&self, target: &mut T) -> ApplyOutcome {
        let id = target.id();
        if !self.state.mark_applied(id) {
            debug!(target_id = %id, "Settings already applied");
            return ApplyOutcome::AlreadyApplied;
        }

        let Some(file) = target
            .file_path()
            .filter(|path| !path.as_os_str().is_empty())
            .map(Path::to_path_buf)
        else {
            debug!(target_id = %id, "No file path, skipping settings resolution");
            return ApplyOutcome::NoFilePath;
        };

        let settings = match self.loader.resolve(&file, target.syntax()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    target_id = %id,
                    file = %file.display(),
                    error = %e,
                    "Could not resolve settings"
                );
                return ApplyOutcome::Unresolvable(e.to_string());
            }
        };

        let keys = settings.len();
        for (key, value) in settings {
            target.set_setting(&key, value);
        }

        info!(target_id = %id, file = %file.display(), keys, "Applied settings");
        ApplyOutcome::Applied { keys }
    }

    /// Forget `id` so the next `apply_once` resolves again. No-op if not registered.
    pub fn release(&self, id: TargetId) {
        if self.state.release(id) {
            debug!(target_id = %id, "Released target");
        }
    }

    /// Apply settings to every currently-open target, as done at startup.
    ///
    /// Returns how many targets had settings newly applied.
    pub fn apply_all<'t, T, I>(&self, targets: I) -> usize
    where
        T: Target + ?Sized + 't,
        I: IntoIterator<Item = &'t mut T>,
    {
        targets
            .into_iter()
            .map(|target| self.apply_once(target))
            .filter(|outcome| matches!(outcome, ApplyOutcome::Applied { .. }))
            .count()
    }
}
