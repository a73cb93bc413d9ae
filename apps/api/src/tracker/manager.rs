use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{ApplicationPatch, JobApplication, JobStatus, NewApplication, TrackerState};
use crate::storage::PersistentSlot;

/// Owns the tracker state and mirrors every change to its storage slot.
///
/// Mutations are copy-on-write: the current state is cloned, the clone is
/// modified and written through, then it replaces the in-memory value. A
/// failed write is logged by the slot and the new state is kept anyway.
pub struct JobTracker {
    slot: PersistentSlot<TrackerState>,
    state: TrackerState,
}

impl JobTracker {
    /// Reads the slot once. `initial` is used when the slot is empty or unreadable.
    pub fn load(slot: PersistentSlot<TrackerState>, initial: TrackerState) -> Self {
        let state = slot.read_or(initial);
        info!(
            "Loaded tracker state from slot '{}' ({} applications, {}/{} applied)",
            slot.key(),
            state.applications.len(),
            state.applied_job_count,
            state.target_job_count
        );
        JobTracker { slot, state }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn application(&self, id: &str) -> Option<&JobApplication> {
        self.state.applications.iter().find(|app| app.id == id)
    }

    pub fn set_target_job_count(&mut self, count: u32) {
        self.mutate(|state| state.target_job_count = count);
        info!("Target job count set to {count}");
    }

    pub fn increment_applied_count(&mut self) {
        self.mutate(|state| state.applied_job_count = state.applied_job_count.saturating_add(1));
    }

    /// Floors at zero.
    pub fn decrement_applied_count(&mut self) {
        self.mutate(|state| state.applied_job_count = state.applied_job_count.saturating_sub(1));
    }

    /// Appends a new record under a fresh UUID and bumps the applied counter.
    pub fn add_application(&mut self, data: NewApplication) -> JobApplication {
        let application = data.with_id(Uuid::new_v4().to_string());
        let stored = application.clone();
        self.mutate(move |state| {
            state.applications.push(stored);
            state.applied_job_count = state.applied_job_count.saturating_add(1);
        });
        info!(
            "Added application {} ({} / {})",
            application.id, application.company_name, application.job_title
        );
        application
    }

    /// Replaces only the fields present in `patch`. Returns `false` when no
    /// record has `id`; the state is left as it was.
    pub fn update_application(&mut self, id: &str, patch: &ApplicationPatch) -> bool {
        let mut found = false;
        self.mutate(|state| {
            for app in state.applications.iter_mut().filter(|app| app.id == id) {
                patch.apply_to(app);
                found = true;
            }
        });
        debug!("Update of application {id}: found={found}");
        found
    }

    /// Removes the record and decrements the applied counter (floored at
    /// zero) whether or not a record matched.
    pub fn delete_application(&mut self, id: &str) -> bool {
        let mut removed = false;
        self.mutate(|state| {
            let before = state.applications.len();
            state.applications.retain(|app| app.id != id);
            removed = state.applications.len() != before;
            state.applied_job_count = state.applied_job_count.saturating_sub(1);
        });
        info!("Deleted application {id}: removed={removed}");
        removed
    }

    pub fn update_status(&mut self, id: &str, status: JobStatus) -> bool {
        self.update_application(id, &ApplicationPatch::status(status))
    }

    /// `applied / target * 100`, capped at 100. Zero when the target is zero.
    pub fn progress_percentage(&self) -> f64 {
        if self.state.target_job_count == 0 {
            return 0.0;
        }
        let ratio = self.state.applied_job_count as f64 / self.state.target_job_count as f64;
        (ratio * 100.0).min(100.0)
    }

    pub fn progress_summary(&self) -> String {
        format!(
            "{} out of {} applications submitted ({}% complete)",
            self.state.applied_job_count,
            self.state.target_job_count,
            self.progress_percentage().round() as u32
        )
    }

    /// Per-status record counts, in `JobStatus::ALL` order.
    pub fn status_counts(&self) -> Vec<(JobStatus, usize)> {
        JobStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self
                    .state
                    .applications
                    .iter()
                    .filter(|app| app.status == status)
                    .count();
                (status, count)
            })
            .collect()
    }

    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TrackerState),
    {
        let mut next = self.state.clone();
        f(&mut next);
        self.slot.write(&next);
        self.state = next;
    }
}
