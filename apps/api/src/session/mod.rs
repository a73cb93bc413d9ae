// Manager session: the tracker plus the table's view state and the editor
// state machine. Keeps the three consistent when records disappear.

pub mod editor;
pub mod handlers;

use tracing::info;

use crate::errors::AppError;
use crate::listing::{derive_page, ApplicationPage, ListView};
use crate::models::{ApplicationPatch, JobApplication, NewApplication};
use crate::session::editor::{Editor, Submission};
use crate::tracker::JobTracker;

pub struct ManagerSession {
    pub tracker: JobTracker,
    pub view: ListView,
    pub editor: Editor,
}

impl ManagerSession {
    pub fn new(tracker: JobTracker) -> Self {
        ManagerSession {
            tracker,
            view: ListView::default(),
            editor: Editor::default(),
        }
    }

    fn total(&self) -> usize {
        self.tracker.state().applications.len()
    }

    /// Clamps the current page against the list and derives the visible slice.
    pub fn current_page(&mut self) -> ApplicationPage {
        let total = self.total();
        self.view.clamp(total);
        derive_page(&self.tracker.state().applications, &self.view)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total();
        self.view.go_to_page(page, total)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.tracker.delete_application(id);
        self.editor.forget(id);
        let total = self.total();
        if self.view.clamp(total) {
            info!("Page clamped to {} after delete", self.view.page);
        }
        removed
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<(), AppError> {
        let application = self
            .tracker
            .application(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
        self.editor.begin_edit(application)?;
        Ok(())
    }

    /// Applies the open form. Returns the resulting record, or `None` when the
    /// edited record was removed while the form was open.
    pub fn submit(&mut self, data: NewApplication) -> Result<Option<JobApplication>, AppError> {
        match self.editor.submit()? {
            Submission::Add => Ok(Some(self.tracker.add_application(data))),
            Submission::Update(id) => {
                let patch = ApplicationPatch::from(data);
                self.tracker.update_application(&id, &patch);
                Ok(self.tracker.application(&id).cloned())
            }
        }
    }
}
